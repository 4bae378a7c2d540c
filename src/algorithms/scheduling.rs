//! CPU scheduling simulators
//!
//! Every simulator produces a Gantt timeline plus per-process waiting and
//! turnaround times:
//! - **FCFS**: arrival order, stable for equal arrivals, no preemption
//! - **SJF**: shortest burst among arrived processes, ties by arrival
//! - **SRTF**: re-evaluated every time unit, contiguous units merged into one block
//! - **Round Robin**: FIFO ready queue; processes arriving during a slice are
//!   queued before the preempted process is re-queued
//! - **Priority**: lowest number first, ties by arrival. Priorities are static;
//!   no aging is applied.
//!
//! `turnaround = completion - arrival` and `waiting = turnaround - burst`, which
//! for the non-preemptive simulators equals `start - arrival`.
//!
//! A burst of zero is scheduled as one time unit.
//! Simulated time saturates at `u32::MAX` instead of wrapping.

use super::ScheduleState;
use crate::step::Step;
use std::collections::VecDeque;

pub const DEFAULT_QUANTUM: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: u32,
    pub name: String,
    pub arrival: u32,
    pub burst: u32,
    pub priority: Option<u32>,
}

impl Process {
    pub fn new(id: u32, name: impl Into<String>, arrival: u32, burst: u32) -> Self {
        Process {
            id,
            name: name.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    fn service(&self) -> u32 {
        self.burst.max(1)
    }
}

/// A contiguous interval of CPU time given to one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttBlock {
    pub process_name: String,
    pub process_id: u32,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStats {
    pub id: u32,
    pub name: String,
    pub arrival: u32,
    pub burst: u32,
    pub completion: u32,
    pub waiting: u32,
    pub turnaround: u32,
}

/// Per-process figures for the processes completed so far, with their means
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStats {
    pub rows: Vec<ProcessStats>,
    pub average_waiting: f64,
    pub average_turnaround: f64,
}

impl ScheduleStats {
    pub fn collect(processes: &[Process], state: &ScheduleState) -> Self {
        let rows: Vec<ProcessStats> = processes
            .iter()
            .filter_map(|p| {
                let waiting = *state.waiting.get(&p.id)?;
                let turnaround = *state.turnaround.get(&p.id)?;
                Some(ProcessStats {
                    id: p.id,
                    name: p.name.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    completion: p.arrival.saturating_add(turnaround),
                    waiting,
                    turnaround,
                })
            })
            .collect();

        let mean = |f: fn(&ProcessStats) -> u32| {
            if rows.is_empty() {
                0.0
            } else {
                rows.iter().map(|r| f64::from(f(r))).sum::<f64>() / rows.len() as f64
            }
        };
        let average_waiting = mean(|r| r.waiting);
        let average_turnaround = mean(|r| r.turnaround);

        ScheduleStats {
            rows,
            average_waiting,
            average_turnaround,
        }
    }
}

pub fn fcfs_default() -> Vec<Process> {
    vec![
        Process::new(0, "P1", 0, 4),
        Process::new(1, "P2", 1, 3),
        Process::new(2, "P3", 2, 1),
        Process::new(3, "P4", 3, 2),
    ]
}

pub fn sjf_default() -> Vec<Process> {
    vec![
        Process::new(0, "P1", 0, 6),
        Process::new(1, "P2", 2, 2),
        Process::new(2, "P3", 4, 8),
        Process::new(3, "P4", 5, 3),
    ]
}

pub fn srtf_default() -> Vec<Process> {
    vec![
        Process::new(0, "P1", 0, 8),
        Process::new(1, "P2", 1, 4),
        Process::new(2, "P3", 2, 9),
        Process::new(3, "P4", 3, 5),
    ]
}

pub fn round_robin_default() -> Vec<Process> {
    vec![
        Process::new(0, "P1", 0, 5),
        Process::new(1, "P2", 1, 3),
        Process::new(2, "P3", 2, 8),
        Process::new(3, "P4", 3, 6),
    ]
}

pub fn priority_default() -> Vec<Process> {
    vec![
        Process::new(0, "P1", 0, 4).with_priority(2),
        Process::new(1, "P2", 1, 3).with_priority(1),
        Process::new(2, "P3", 2, 1).with_priority(4),
        Process::new(3, "P4", 3, 5).with_priority(3),
    ]
}

/// Accumulates the Gantt chart and statistics of one simulation
struct Recorder<'a> {
    processes: &'a [Process],
    label: &'static str,
    state: ScheduleState,
    steps: Vec<Step<ScheduleState>>,
}

impl<'a> Recorder<'a> {
    fn new(processes: &'a [Process], label: &'static str, detail: String) -> Self {
        let mut rec = Recorder {
            processes,
            label,
            state: ScheduleState::default(),
            steps: Vec::new(),
        };
        rec.snapshot(format!(
            "Scheduling {} process(es) with {label}{detail}",
            processes.len()
        ));
        rec
    }

    fn snapshot(&mut self, message: String) {
        self.steps.push(Step::new(self.state.clone(), message));
    }

    /// Record `[start, end)` as its own block
    fn execute(&mut self, index: usize, start: u32, end: u32) {
        let p = &self.processes[index];
        self.state.blocks.push(GanttBlock {
            process_name: p.name.clone(),
            process_id: p.id,
            start,
            end,
        });
        self.state.time = end;
        self.state.running = Some(p.id);
    }

    /// Record `[start, end)`, extending the last block when it is the same process
    fn execute_merged(&mut self, index: usize, start: u32, end: u32) {
        let id = self.processes[index].id;
        match self.state.blocks.last_mut() {
            Some(last) if last.process_id == id && last.end == start => {
                last.end = end;
                self.state.time = end;
                self.state.running = Some(id);
            }
            _ => self.execute(index, start, end),
        }
    }

    fn complete(&mut self, index: usize, at: u32) -> (u32, u32) {
        let p = &self.processes[index];
        let turnaround = at.saturating_sub(p.arrival);
        let waiting = turnaround.saturating_sub(p.service());
        self.state.turnaround.insert(p.id, turnaround);
        self.state.waiting.insert(p.id, waiting);
        (turnaround, waiting)
    }

    fn set_ready(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.state.ready = indices
            .into_iter()
            .map(|i| self.processes[i].id)
            .collect();
    }

    fn finish(mut self) -> Vec<Step<ScheduleState>> {
        self.state.running = None;
        self.state.ready.clear();
        self.state.completed = true;
        let message = if self.processes.is_empty() {
            "No processes to schedule".to_string()
        } else {
            format!("{} Scheduling Completed", self.label)
        };
        self.snapshot(message);
        self.steps
    }
}

/// Indices sorted by arrival, keeping input order for equal arrivals
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);
    order
}

pub fn fcfs(processes: &[Process]) -> Vec<Step<ScheduleState>> {
    let mut rec = Recorder::new(processes, "FCFS", String::new());
    let order = arrival_order(processes);
    let mut time = 0;

    for (pos, &i) in order.iter().enumerate() {
        let p = &processes[i];
        let start = time.max(p.arrival);
        let end = start.saturating_add(p.service());
        rec.execute(i, start, end);
        rec.complete(i, end);
        rec.set_ready(
            order[pos + 1..]
                .iter()
                .copied()
                .filter(|&j| processes[j].arrival <= end),
        );
        rec.snapshot(format!("Executing {} from time {start} to {end}", p.name));
        time = end;
    }

    rec.finish()
}

/// Shared loop of the non-preemptive selectors (SJF, Priority)
fn non_preemptive<K: Ord>(
    rec: &mut Recorder<'_>,
    key: impl Fn(usize) -> K,
    describe: impl Fn(&Process, u32, u32) -> String,
) {
    let processes = rec.processes;
    let n = processes.len();
    let mut done = vec![false; n];
    let mut time = 0;

    for _ in 0..n {
        let arrived = |time: u32, done: &[bool]| -> Vec<usize> {
            (0..n)
                .filter(|&i| !done[i] && processes[i].arrival <= time)
                .collect()
        };

        let mut ready = arrived(time, &done);
        if ready.is_empty() {
            let Some(next) = (0..n)
                .filter(|&i| !done[i])
                .map(|i| processes[i].arrival)
                .min()
            else {
                break;
            };
            time = time.max(next);
            ready = arrived(time, &done);
        }
        let Some(i) = ready.iter().copied().min_by_key(|&i| (key(i), processes[i].arrival, i)) else {
            break;
        };

        let p = &processes[i];
        let (start, end) = (time, time.saturating_add(p.service()));
        rec.execute(i, start, end);
        rec.complete(i, end);
        done[i] = true;
        rec.set_ready(arrived(end, &done));
        rec.snapshot(describe(p, start, end));
        time = end;
    }
}

pub fn sjf(processes: &[Process]) -> Vec<Step<ScheduleState>> {
    let mut rec = Recorder::new(processes, "SJF", String::new());
    non_preemptive(
        &mut rec,
        |i| processes[i].service(),
        |p, start, end| format!("Executing {} from time {start} to {end}", p.name),
    );
    rec.finish()
}

/// Static priority scheduling; lower numbers run first
pub fn priority(processes: &[Process]) -> Vec<Step<ScheduleState>> {
    let mut rec = Recorder::new(processes, "Priority", String::new());
    non_preemptive(
        &mut rec,
        |i| processes[i].priority.unwrap_or(0),
        |p, _, _| {
            format!(
                "Executing {} (Priority {})",
                p.name,
                p.priority.unwrap_or(0)
            )
        },
    );
    rec.finish()
}

pub fn srtf(processes: &[Process]) -> Vec<Step<ScheduleState>> {
    let mut rec = Recorder::new(processes, "SRTF", String::new());
    let n = processes.len();
    let mut remaining: Vec<u32> = processes.iter().map(Process::service).collect();
    let mut completed = 0;
    let mut time = 0;

    while completed < n {
        let pick = (0..n)
            .filter(|&i| remaining[i] > 0 && processes[i].arrival <= time)
            .min_by_key(|&i| (remaining[i], processes[i].arrival, i));

        let Some(i) = pick else {
            match (0..n)
                .filter(|&i| remaining[i] > 0)
                .map(|i| processes[i].arrival)
                .min()
            {
                Some(next) => {
                    time = time.max(next);
                    continue;
                }
                None => break,
            }
        };

        rec.execute_merged(i, time, time.saturating_add(1));
        remaining[i] -= 1;
        time = time.saturating_add(1);
        if remaining[i] == 0 {
            rec.complete(i, time);
            completed += 1;
        }
        rec.set_ready(
            (0..n).filter(|&j| j != i && remaining[j] > 0 && processes[j].arrival <= time),
        );
        rec.snapshot(format!(
            "Executing {} (Remaining: {})",
            processes[i].name, remaining[i]
        ));
    }

    rec.finish()
}

pub fn round_robin(processes: &[Process], quantum: u32) -> Vec<Step<ScheduleState>> {
    let quantum = quantum.max(1);
    let mut rec = Recorder::new(
        processes,
        "Round Robin",
        format!(" (quantum {quantum})"),
    );
    let n = processes.len();
    let order = arrival_order(processes);
    let mut remaining: Vec<u32> = processes.iter().map(Process::service).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next = 0;
    let mut time = 0;
    let mut completed = 0;

    let admit = |time: u32, next: &mut usize, queue: &mut VecDeque<usize>| {
        while *next < n && processes[order[*next]].arrival <= time {
            queue.push_back(order[*next]);
            *next += 1;
        }
    };
    admit(time, &mut next, &mut queue);

    while completed < n {
        let Some(i) = queue.pop_front() else {
            if next >= n {
                break;
            }
            time = time.max(processes[order[next]].arrival);
            admit(time, &mut next, &mut queue);
            continue;
        };

        let p = &processes[i];
        let slice = quantum.min(remaining[i]);
        let start = time;
        time = time.saturating_add(slice);
        remaining[i] -= slice;
        rec.execute(i, start, time);

        // Arrivals during the slice go ahead of the preempted process
        admit(time, &mut next, &mut queue);

        if remaining[i] > 0 {
            queue.push_back(i);
            rec.set_ready(queue.iter().copied());
            rec.snapshot(format!(
                "{} executed for {slice} units ({start}-{time}), {} units remaining. Re-added to queue.",
                p.name, remaining[i]
            ));
        } else {
            completed += 1;
            let (turnaround, waiting) = rec.complete(i, time);
            rec.set_ready(queue.iter().copied());
            rec.snapshot(format!(
                "{} completed at time {time}. Turnaround: {turnaround}, Waiting: {waiting}",
                p.name
            ));
        }
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(steps: &[Step<ScheduleState>]) -> Vec<(String, u32, u32)> {
        steps
            .last()
            .unwrap()
            .state
            .blocks
            .iter()
            .map(|b| (b.process_name.clone(), b.start, b.end))
            .collect()
    }

    fn span(name: &str, start: u32, end: u32) -> (String, u32, u32) {
        (name.to_string(), start, end)
    }

    #[test]
    fn test_fcfs_default_schedule() {
        let processes = fcfs_default();
        let steps = fcfs(&processes);
        assert_eq!(
            spans(&steps),
            vec![span("P1", 0, 4), span("P2", 4, 7), span("P3", 7, 8), span("P4", 8, 10)]
        );
        let stats = ScheduleStats::collect(&processes, &steps.last().unwrap().state);
        let waits: Vec<u32> = stats.rows.iter().map(|r| r.waiting).collect();
        assert_eq!(waits, vec![0, 3, 5, 5]);
        assert!((stats.average_waiting - 3.25).abs() < 1e-9);
        assert!((stats.average_turnaround - 5.75).abs() < 1e-9);
        assert_eq!(steps[1].message, "Executing P1 from time 0 to 4");
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(0, "A", 0, 2), Process::new(1, "B", 5, 1)];
        assert_eq!(spans(&fcfs(&processes)), vec![span("A", 0, 2), span("B", 5, 6)]);
    }

    #[test]
    fn test_sjf_default_order() {
        let steps = sjf(&sjf_default());
        assert_eq!(
            spans(&steps),
            vec![span("P1", 0, 6), span("P2", 6, 8), span("P4", 8, 11), span("P3", 11, 19)]
        );
    }

    #[test]
    fn test_srtf_merges_units() {
        let processes = srtf_default();
        let steps = srtf(&processes);
        assert_eq!(
            spans(&steps),
            vec![
                span("P1", 0, 1),
                span("P2", 1, 5),
                span("P4", 5, 10),
                span("P1", 10, 17),
                span("P3", 17, 26),
            ]
        );
        // one step per time unit, plus init and completion
        assert_eq!(steps.len(), 26 + 2);
        let state = &steps.last().unwrap().state;
        assert_eq!(state.waiting[&0], 9);
        assert_eq!(state.waiting[&1], 0);
        assert_eq!(state.waiting[&2], 15);
        assert_eq!(state.waiting[&3], 2);
        assert_eq!(steps.last().unwrap().message, "SRTF Scheduling Completed");
    }

    #[test]
    fn test_round_robin_arrival_before_requeue() {
        let steps = round_robin(&round_robin_default(), 2);
        let blocks = spans(&steps);
        assert_eq!(
            blocks[..5].to_vec(),
            vec![
                span("P1", 0, 2),
                span("P2", 2, 4),
                span("P3", 4, 6),
                span("P1", 6, 8),
                span("P4", 8, 10),
            ]
        );
        assert_eq!(blocks.last(), Some(&span("P3", 20, 22)));
        assert_eq!(
            steps[1].message,
            "P1 executed for 2 units (0-2), 3 units remaining. Re-added to queue."
        );
    }

    #[test]
    fn test_round_robin_zero_quantum_treated_as_one() {
        let steps = round_robin(&[Process::new(0, "A", 0, 2)], 0);
        assert_eq!(spans(&steps), vec![span("A", 0, 1), span("A", 1, 2)]);
    }

    #[test]
    fn test_priority_default_order() {
        let steps = priority(&priority_default());
        assert_eq!(
            spans(&steps),
            vec![span("P1", 0, 4), span("P2", 4, 7), span("P4", 7, 12), span("P3", 12, 13)]
        );
        assert_eq!(steps[2].message, "Executing P2 (Priority 1)");
    }

    #[test]
    fn test_empty_process_list() {
        let steps = fcfs(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].message, "No processes to schedule");
    }
}
