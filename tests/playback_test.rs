// Integration tests for the animation controller driving real algorithms

use std::time::{Duration, Instant};

use algotrace::algorithms::tsp::generate_cities;
use algotrace::algorithms::{Algorithm, AlgorithmInput, Instance, Scene};
use algotrace::playback::controller::DEFAULT_MAX_STEPS;
use algotrace::playback::{AnimationController, PlaybackStatus};

fn controller(algorithm: Algorithm) -> AnimationController<Instance> {
    AnimationController::new(
        Instance::with_defaults(algorithm, 42),
        Duration::from_millis(algorithm.interval_ms()),
        DEFAULT_MAX_STEPS,
    )
}

#[test]
fn test_live_trace_total_unknown_until_exhausted() {
    let mut c = controller(Algorithm::NQueens);
    assert!(c.step().is_some());
    assert_eq!(c.known_len(), 1);
    assert!(!c.is_exhausted());
    assert_eq!(c.message(), "Starting search...");

    c.skip_to_end();
    assert_eq!(c.status(), PlaybackStatus::Finished);
    assert_eq!(c.message(), "Solution found!");
    assert_eq!(c.position(), c.known_len());
    let Some(Scene::Board(board)) = c.current().map(|s| &s.state) else {
        panic!("expected board scene");
    };
    assert_eq!(board.queens, vec![1, 3, 0, 2]);
}

#[test]
fn test_recorded_trace_is_known_after_first_step() {
    let mut c = controller(Algorithm::LinearSearch);
    c.step();
    let total = Instance::with_defaults(Algorithm::LinearSearch, 42).run().len();
    assert_eq!(c.known_len(), total);
    assert_eq!(c.position(), 1);
}

#[test]
fn test_reset_returns_to_idle() {
    let mut c = controller(Algorithm::QuickSort);
    c.step();
    c.step();
    c.reset();
    assert_eq!(c.status(), PlaybackStatus::Idle);
    assert_eq!(c.position(), 0);
    assert_eq!(c.known_len(), 0);
    assert_eq!(c.message(), "Click Play to start Quick Sort");
}

#[test]
fn test_apply_discards_previous_steps() {
    let mut c = controller(Algorithm::InsertionSort);
    c.skip_to_end();
    c.apply(Instance::new(
        Algorithm::InsertionSort,
        AlgorithmInput::Array { array: vec![2, 1] },
    ));
    assert_eq!(c.status(), PlaybackStatus::Idle);
    c.skip_to_end();
    let Some(Scene::Array(array)) = c.current().map(|s| &s.state) else {
        panic!("expected array scene");
    };
    assert_eq!(array.values, vec![1, 2]);
}

#[test]
fn test_step_limit_truncates_live_trace() {
    // 7 cities means 720 tours, far beyond the limit
    let input = AlgorithmInput::Cities {
        cities: generate_cities(7, 42),
        seed: 42,
    };
    let mut c = AnimationController::new(
        Instance::new(Algorithm::TspExact, input),
        Duration::from_millis(50),
        10,
    );
    let applied = c.skip_to_end();
    assert_eq!(applied, 10);
    assert!(c.is_exhausted());
    assert_eq!(c.status(), PlaybackStatus::Finished);
}

#[test]
fn test_step_limit_truncates_recorded_trace() {
    let mut c = AnimationController::new(
        Instance::with_defaults(Algorithm::MergeSort, 0),
        Duration::from_millis(100),
        5,
    );
    assert_eq!(c.skip_to_end(), 5);
    assert_eq!(c.known_len(), 5);
}

#[test]
fn test_timer_paced_playback() {
    let mut c = controller(Algorithm::BinarySearch);
    let interval = c.interval();
    let start = Instant::now();
    c.play();
    assert!(c.poll(start));
    assert!(!c.poll(start + interval / 2));
    assert!(c.poll(start + interval));
    assert_eq!(c.position(), 2);

    c.pause();
    assert!(!c.poll(start + interval * 5));
    assert_eq!(c.status(), PlaybackStatus::Ready);
}

#[test]
fn test_playback_auto_stops_at_end() {
    let mut c = controller(Algorithm::Fcfs);
    c.play();
    while c.tick().is_some() {}
    assert!(!c.is_playing());
    assert_eq!(c.status(), PlaybackStatus::Finished);
    assert_eq!(c.message(), "FCFS Scheduling Completed");
    assert!(c.step().is_none());
}
