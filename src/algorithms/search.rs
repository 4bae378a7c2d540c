// Searching: linear, binary, naive pattern matching, quickselect

use super::{ArrayState, MatchState};
use crate::step::Step;

/// Scan left to right; the first match is the terminal step
pub fn linear_search(array: &[i64], target: i64) -> Vec<Step<ArrayState>> {
    let mut steps = vec![Step::new(
        ArrayState::new(array.to_vec()),
        format!("Searching for {target} in {} element(s)", array.len()),
    )];

    for (i, &value) in array.iter().enumerate() {
        let mut state = ArrayState::new(array.to_vec());
        state.settled = (0..i).collect();
        if value == target {
            state.found = Some(i);
            steps.push(Step::new(state, format!("✓ Found {target} at index {i}!")));
            return steps;
        }
        state.active = vec![i];
        steps.push(Step::new(
            state,
            format!("Checking index {i}: {value} ≠ {target}"),
        ));
    }

    let mut state = ArrayState::new(array.to_vec());
    state.settled = (0..array.len()).collect();
    steps.push(Step::new(
        state,
        format!("Element {target} not found in the array"),
    ));
    steps
}

/// Iterative binary search over an already sorted array
pub fn binary_search(array: &[i64], target: i64) -> Vec<Step<ArrayState>> {
    let snapshot = |left: isize, right: isize| {
        let mut state = ArrayState::new(array.to_vec());
        if left <= right {
            state.window = Some((left as usize, right as usize));
        }
        state
    };

    let mut left: isize = 0;
    let mut right: isize = array.len() as isize - 1;
    let mut steps = vec![Step::new(
        snapshot(left, right),
        format!("Starting binary search for {target}"),
    )];

    loop {
        if left > right {
            steps.push(Step::new(
                snapshot(left, right),
                format!("Search space empty (left={left}, right={right})"),
            ));
            steps.push(Step::new(
                ArrayState::new(array.to_vec()),
                format!("Element {target} not found in the array"),
            ));
            return steps;
        }

        let mid = left + (right - left) / 2;
        let value = array[mid as usize];
        let relation = match value.cmp(&target) {
            std::cmp::Ordering::Equal => "==",
            std::cmp::Ordering::Greater => ">",
            std::cmp::Ordering::Less => "<",
        };

        let mut probe = snapshot(left, right);
        probe.marker = Some(mid as usize);
        probe.active = vec![mid as usize];
        steps.push(Step::new(
            probe.clone(),
            format!("Checking index {mid}: {value} {relation} {target}"),
        ));

        if value == target {
            probe.active.clear();
            probe.found = Some(mid as usize);
            steps.push(Step::new(probe, format!("✓ Found {target} at index {mid}!")));
            return steps;
        } else if value > target {
            right = mid - 1;
            steps.push(Step::new(
                snapshot(left, right),
                format!("Target {target} < {value}, searching left half"),
            ));
        } else {
            left = mid + 1;
            steps.push(Step::new(
                snapshot(left, right),
                format!("Target {target} > {value}, searching right half"),
            ));
        }
    }
}

/// Slide the pattern over the text one alignment at a time
pub fn pattern_match(text: &str, pattern: &str) -> Vec<Step<MatchState>> {
    let text_chars: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let n = text_chars.len();
    let m = pattern_chars.len();

    let base = MatchState {
        text: text.to_string(),
        pattern: pattern.to_string(),
        ..Default::default()
    };
    let mut matches = Vec::new();
    let mut steps = vec![Step::new(
        base.clone(),
        format!("Searching for \"{pattern}\" in text of length {n}"),
    )];

    if m > 0 && m <= n {
        for i in 0..=(n - m) {
            let at = |compared: Option<usize>, mismatch: bool, matches: &Vec<usize>| MatchState {
                position: Some(i),
                compared,
                mismatch,
                matches: matches.clone(),
                ..base.clone()
            };

            steps.push(Step::new(
                at(None, false, &matches),
                format!("Checking position {i} in text..."),
            ));

            let mut full = true;
            for j in 0..m {
                let (t, p) = (text_chars[i + j], pattern_chars[j]);
                if t == p {
                    steps.push(Step::new(
                        at(Some(j), false, &matches),
                        format!("Match: text[{}]='{t}' == pattern[{j}]='{p}'", i + j),
                    ));
                } else {
                    steps.push(Step::new(
                        at(Some(j), true, &matches),
                        format!("Mismatch at text[{}]='{t}' != pattern[{j}]='{p}'", i + j),
                    ));
                    full = false;
                    break;
                }
            }

            if full {
                matches.push(i);
                steps.push(Step::new(
                    at(None, false, &matches),
                    format!("✓ Pattern found at position {i}!"),
                ));
            }
        }
    }

    let count = matches.len();
    steps.push(Step::new(
        MatchState { matches, ..base },
        format!("Search complete! Found {count} match(es)"),
    ));
    steps
}

/// Quickselect with Lomuto partitioning around the last element
pub fn kth_smallest(array: &[i64], k: i64) -> Vec<Step<ArrayState>> {
    let mut arr = array.to_vec();
    let n = arr.len();
    let mut steps = vec![Step::new(
        ArrayState::new(arr.clone()),
        format!("Looking for {k}-th smallest (Index {})", k.saturating_sub(1)),
    )];

    if k < 1 || k as usize > n {
        steps.push(Step::new(
            ArrayState::new(arr),
            format!("k = {k} is out of range for {n} element(s)"),
        ));
        return steps;
    }

    let target = (k - 1) as usize;
    let mut settled = Vec::new();
    let (mut low, mut high) = (0usize, n - 1);

    loop {
        let pivot = arr[high];
        let frame = |arr: &Vec<i64>, settled: &Vec<usize>| {
            let mut state = ArrayState::new(arr.clone());
            state.window = Some((low, high));
            state.pivot = Some(high);
            state.settled = settled.clone();
            state
        };

        steps.push(Step::new(
            frame(&arr, &settled),
            format!("Partitioning with Pivot: {pivot} (Index {high})"),
        ));

        let mut i = low;
        for j in low..high {
            let mut state = frame(&arr, &settled);
            state.active = vec![j];
            state.marker = Some(i);
            steps.push(Step::new(
                state,
                format!("Comparing {} with pivot {pivot}", arr[j]),
            ));
            if arr[j] <= pivot {
                if i != j {
                    let (a, b) = (arr[i], arr[j]);
                    arr.swap(i, j);
                    let mut state = frame(&arr, &settled);
                    state.active = vec![i, j];
                    steps.push(Step::new(state, format!("Swapped {a} and {b}")));
                }
                i += 1;
            }
        }

        arr.swap(i, high);
        settled.push(i);
        let mut placed = frame(&arr, &settled);
        placed.pivot = Some(i);
        steps.push(Step::new(placed, format!("Pivot placed at Index {i}")));

        if i == target {
            let mut state = ArrayState::new(arr.clone());
            state.settled = settled;
            state.found = Some(i);
            steps.push(Step::new(
                state,
                format!("Found {k}-th smallest element: {}", arr[i]),
            ));
            return steps;
        } else if i > target {
            steps.push(Step::new(
                frame(&arr, &settled),
                format!("Index {i} > {target}, recurse Left"),
            ));
            high = i - 1;
        } else {
            steps.push(Step::new(
                frame(&arr, &settled),
                format!("Index {i} < {target}, recurse Right"),
            ));
            low = i + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_found() {
        let steps = linear_search(&[64, 34, 25, 12, 22, 11, 90], 22);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "✓ Found 22 at index 4!");
        assert_eq!(last.state.found, Some(4));
        assert_eq!(steps[1].message, "Checking index 0: 64 ≠ 22");
    }

    #[test]
    fn test_linear_search_missing() {
        let steps = linear_search(&[1, 2], 35);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3].message, "Element 35 not found in the array");
    }

    #[test]
    fn test_binary_search_single_probe() {
        let steps = binary_search(&[11, 22, 33, 44, 55, 66, 77, 88, 99], 55);
        let probes = steps
            .iter()
            .filter(|s| s.message.starts_with("Checking"))
            .count();
        assert_eq!(probes, 1);
        assert_eq!(steps.last().unwrap().message, "✓ Found 55 at index 4!");
    }

    #[test]
    fn test_binary_search_exhausts_window() {
        let steps = binary_search(&[10, 20, 30], 5);
        let n = steps.len();
        assert_eq!(steps[n - 2].message, "Search space empty (left=0, right=-1)");
        assert_eq!(steps[n - 1].message, "Element 5 not found in the array");
    }

    #[test]
    fn test_binary_search_empty_array() {
        let steps = binary_search(&[], 1);
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_pattern_match_positions() {
        let steps = pattern_match("AABAACAADAABAABA", "AABA");
        let last = steps.last().unwrap();
        assert_eq!(last.state.matches, vec![0, 9, 12]);
        assert_eq!(last.message, "Search complete! Found 3 match(es)");
    }

    #[test]
    fn test_pattern_match_empty_pattern() {
        let steps = pattern_match("abc", "");
        assert_eq!(steps.len(), 2);
        assert!(steps[1].state.matches.is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let steps = pattern_match("ab", "abc");
        assert_eq!(steps.last().unwrap().message, "Search complete! Found 0 match(es)");
    }

    #[test]
    fn test_kth_smallest_default() {
        let steps = kth_smallest(&[7, 10, 4, 3, 20, 15, 1, 30, 25], 3);
        assert_eq!(
            steps.last().unwrap().message,
            "Found 3-th smallest element: 4"
        );
    }

    #[test]
    fn test_kth_smallest_every_rank() {
        let input = [5, 1, 4, 1, 9, 2];
        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        for k in 1..=input.len() {
            let last = kth_smallest(&input, k as i64).pop().unwrap();
            let index = last.state.found.unwrap();
            assert_eq!(last.state.values[index], sorted[k - 1]);
        }
    }

    #[test]
    fn test_kth_smallest_out_of_range() {
        let steps = kth_smallest(&[1, 2, 3], 4);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].message, "k = 4 is out of range for 3 element(s)");
        let steps = kth_smallest(&[], 1);
        assert_eq!(steps[1].message, "k = 1 is out of range for 0 element(s)");
    }
}
