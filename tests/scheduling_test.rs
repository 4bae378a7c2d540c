// Integration tests for the CPU scheduling simulators

use algotrace::algorithms::scheduling::{self, Process, ScheduleStats};
use algotrace::algorithms::{Algorithm, AlgorithmInput, Instance, Scene, ScheduleState};
use algotrace::input::InputPanel;
use algotrace::step::Step;
use proptest::prelude::*;

fn blocks(steps: &[Step<ScheduleState>]) -> Vec<(u32, u32, u32)> {
    steps
        .last()
        .unwrap()
        .state
        .blocks
        .iter()
        .map(|b| (b.process_id, b.start, b.end))
        .collect()
}

#[test]
fn test_priority_has_no_aging() {
    // A low-priority process arriving early is overtaken by every later high-priority one
    let processes = vec![
        Process::new(0, "P1", 0, 10).with_priority(1),
        Process::new(1, "Low", 1, 1).with_priority(9),
        Process::new(2, "P3", 2, 10).with_priority(1),
        Process::new(3, "P4", 12, 5).with_priority(1),
    ];
    let steps = scheduling::priority(&processes);
    assert_eq!(
        blocks(&steps),
        vec![(0, 0, 10), (2, 10, 20), (3, 20, 25), (1, 25, 26)]
    );

    let stats = ScheduleStats::collect(&processes, &steps.last().unwrap().state);
    let low = stats.rows.iter().find(|r| r.name == "Low").unwrap();
    assert_eq!(low.waiting, 24);
    assert_eq!(low.completion, 26);
}

#[test]
fn test_round_robin_small_quantum() {
    let processes = vec![Process::new(0, "P1", 0, 5), Process::new(1, "P2", 1, 3)];
    let steps = scheduling::round_robin(&processes, 2);
    assert_eq!(
        blocks(&steps),
        vec![(0, 0, 2), (1, 2, 4), (0, 4, 6), (1, 6, 7), (0, 7, 8)]
    );
    assert_eq!(
        steps[1].message,
        "P1 executed for 2 units (0-2), 3 units remaining. Re-added to queue."
    );
    assert_eq!(steps[4].message, "P2 completed at time 7. Turnaround: 6, Waiting: 3");
    assert_eq!(steps.last().unwrap().message, "Round Robin Scheduling Completed");
}

#[test]
fn test_srtf_preempts_longer_job() {
    let processes = vec![Process::new(0, "P1", 0, 7), Process::new(1, "P2", 2, 2)];
    let steps = scheduling::srtf(&processes);
    assert_eq!(blocks(&steps), vec![(0, 0, 2), (1, 2, 4), (0, 4, 9)]);

    let stats = ScheduleStats::collect(&processes, &steps.last().unwrap().state);
    let waits: Vec<u32> = stats.rows.iter().map(|r| r.waiting).collect();
    assert_eq!(waits, vec![2, 0]);
    assert!((stats.average_turnaround - 5.5).abs() < 1e-9);
}

#[test]
fn test_stats_only_count_completed_processes() {
    let processes = scheduling::fcfs_default();
    let steps = scheduling::fcfs(&processes);
    // After the first execution step only P1 has finished
    let stats = ScheduleStats::collect(&processes, &steps[1].state);
    assert_eq!(stats.rows.len(), 1);
    assert_eq!(stats.rows[0].name, "P1");
    assert!((stats.average_turnaround - 4.0).abs() < 1e-9);

    let initial = ScheduleStats::collect(&processes, &steps[0].state);
    assert!(initial.rows.is_empty());
    assert_eq!(initial.average_waiting, 0.0);
}

#[test]
fn test_instance_passes_quantum() {
    let instance = Instance::new(
        Algorithm::RoundRobin,
        AlgorithmInput::Processes {
            processes: vec![Process::new(0, "Solo", 0, 6)],
            quantum: 4,
        },
    );
    let steps = instance.run();
    assert_eq!(steps[0].message, "Scheduling 1 process(es) with Round Robin (quantum 4)");
    let Scene::Schedule(last) = &steps.last().unwrap().state else {
        panic!("expected schedule scene");
    };
    let spans: Vec<(u32, u32)> = last.blocks.iter().map(|b| (b.start, b.end)).collect();
    assert_eq!(spans, vec![(0, 4), (4, 6)]);
    assert!(last.completed);
}

#[test]
fn test_times_near_u32_max_saturate() {
    for algorithm in [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ] {
        let mut panel = InputPanel::new(algorithm, 0);
        panel.set_value("processes", "P1 4294967295 5; P2 4294967290 9 1");
        let instance = Instance::new(algorithm, panel.apply().unwrap());
        let steps = instance.run();

        let last = steps.last().unwrap();
        assert!(last.message.ends_with("Scheduling Completed"), "{}", last.message);
        let Scene::Schedule(state) = &last.state else {
            panic!("expected schedule scene");
        };
        assert!(state.completed);
        assert!(state.blocks.iter().all(|b| b.start <= b.end));
        assert_eq!(state.time, u32::MAX);

        let stats = ScheduleStats::collect(instance.processes().unwrap(), state);
        assert_eq!(stats.rows.len(), 2);
        assert!(stats.rows.iter().all(|r| r.completion == u32::MAX));
    }
}

fn arb_processes() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u32..12, 1u32..6, 0u32..5), 1..7).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32, format!("P{}", i + 1), arrival, burst)
                    .with_priority(priority)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_every_scheduler_conserves_work(processes in arb_processes(), quantum in 1u32..4) {
        let runs = [
            scheduling::fcfs(&processes),
            scheduling::sjf(&processes),
            scheduling::srtf(&processes),
            scheduling::priority(&processes),
            scheduling::round_robin(&processes, quantum),
        ];
        for steps in runs {
            let last = &steps.last().unwrap().state;
            prop_assert!(last.completed);

            // Blocks never overlap and never start before arrival
            let mut previous_end = 0;
            for block in &last.blocks {
                prop_assert!(block.start >= previous_end);
                prop_assert!(block.end > block.start);
                let p = &processes[block.process_id as usize];
                prop_assert!(block.start >= p.arrival);
                previous_end = block.end;
            }

            for p in &processes {
                let served: u32 = last
                    .blocks
                    .iter()
                    .filter(|b| b.process_id == p.id)
                    .map(|b| b.end - b.start)
                    .sum();
                prop_assert_eq!(served, p.burst);
            }

            let stats = ScheduleStats::collect(&processes, last);
            prop_assert_eq!(stats.rows.len(), processes.len());
            for row in &stats.rows {
                prop_assert_eq!(row.turnaround, row.waiting + row.burst);
            }
        }
    }
}
