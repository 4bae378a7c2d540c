// Integration tests for the step generators

use algotrace::algorithms::{sort, search, Algorithm, AlgorithmInput, Instance, Scene};
use algotrace::step::Step;
use proptest::prelude::*;

fn array_of(step: &Step<Scene>) -> &[i64] {
    match &step.state {
        Scene::Array(state) => &state.values,
        other => panic!("expected array scene, got {other:?}"),
    }
}

#[test]
fn test_every_default_run_is_deterministic_and_nonempty() {
    for algorithm in Algorithm::ALL {
        let instance = Instance::with_defaults(algorithm, 11);
        let first = instance.run();
        let second = instance.run();
        assert!(first.len() >= 2, "{} produced {} steps", algorithm.slug(), first.len());
        assert_eq!(first, second, "{} is not deterministic", algorithm.slug());
        assert!(
            first.iter().all(|s| !s.message.is_empty()),
            "{} has an empty message",
            algorithm.slug()
        );
    }
}

#[test]
fn test_default_searches() {
    let linear = Instance::with_defaults(Algorithm::LinearSearch, 0).run();
    assert_eq!(linear.last().unwrap().message, "✓ Found 22 at index 4!");

    let binary = Instance::with_defaults(Algorithm::BinarySearch, 0).run();
    assert_eq!(binary.last().unwrap().message, "✓ Found 55 at index 4!");

    let kth = Instance::with_defaults(Algorithm::KthSmallest, 0).run();
    assert_eq!(
        kth.last().unwrap().message,
        "Found 3-th smallest element: 4"
    );
}

#[test]
fn test_default_pattern_matches() {
    let steps = Instance::with_defaults(Algorithm::PatternMatching, 0).run();
    let Scene::Text(state) = &steps.last().unwrap().state else {
        panic!("expected text scene");
    };
    assert_eq!(state.matches, vec![0, 9, 12]);
}

#[test]
fn test_binary_search_missing_target() {
    let steps = search::binary_search(&[1, 3, 5, 7], 4);
    assert_eq!(
        steps.last().unwrap().message,
        "Element 4 not found in the array"
    );
}

#[test]
fn test_mismatched_input_is_a_single_step() {
    let instance = Instance::new(
        Algorithm::Dijkstra,
        AlgorithmInput::Array { array: vec![1, 2] },
    );
    let steps = instance.run();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].message, "No Dijkstra's Algorithm input to run");
}

#[test]
fn test_sorts_end_sorted_through_instance() {
    for algorithm in [
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
    ] {
        let steps = Instance::with_defaults(algorithm, 0).run();
        let last = steps.last().unwrap();
        let mut expected = array_of(&steps[0]).to_vec();
        expected.sort_unstable();
        assert_eq!(array_of(last), expected.as_slice(), "{}", algorithm.slug());
        assert_eq!(last.message, "✓ Array is now sorted!");
    }
}

type SortFn = fn(&[i64]) -> Vec<Step<algotrace::algorithms::ArrayState>>;

const SORTS: [SortFn; 4] = [
    sort::insertion_sort,
    sort::merge_sort,
    sort::quick_sort,
    sort::heap_sort,
];

proptest! {
    #[test]
    fn prop_sorts_yield_sorted_permutation(values in prop::collection::vec(-500i64..500, 0..32)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for sort_fn in SORTS {
            let steps = sort_fn(&values);
            prop_assert!(!steps.is_empty());
            for step in &steps {
                let mut seen = step.state.values.clone();
                seen.sort_unstable();
                prop_assert_eq!(&seen, &expected);
            }
            prop_assert_eq!(&steps.last().unwrap().state.values, &expected);
        }
    }

    #[test]
    fn prop_kth_smallest_matches_sorted(
        values in prop::collection::vec(-100i64..100, 1..24),
        pick in any::<usize>(),
    ) {
        let k = pick % values.len() + 1;
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let steps = search::kth_smallest(&values, k as i64);
        prop_assert_eq!(
            &steps.last().unwrap().message,
            &format!("Found {k}-th smallest element: {}", sorted[k - 1])
        );
    }

    #[test]
    fn prop_generation_is_deterministic(values in prop::collection::vec(-50i64..50, 0..16)) {
        let instance = Instance::new(Algorithm::QuickSort, AlgorithmInput::Array { array: values });
        prop_assert_eq!(instance.run(), instance.run());
    }
}
