// Comparison sorts: one step per comparison and one per write or swap

use super::ArrayState;
use crate::step::Step;

/// Records steps for one sort run over a working copy of the input
struct Recorder {
    arr: Vec<i64>,
    settled: Vec<usize>,
    steps: Vec<Step<ArrayState>>,
}

impl Recorder {
    fn new(array: &[i64], message: String) -> Self {
        let mut recorder = Recorder {
            arr: array.to_vec(),
            settled: Vec::new(),
            steps: Vec::new(),
        };
        recorder.push(&[], None, None, message);
        recorder
    }

    fn push(
        &mut self,
        active: &[usize],
        window: Option<(usize, usize)>,
        pivot: Option<usize>,
        message: String,
    ) {
        let state = ArrayState {
            values: self.arr.clone(),
            active: active.to_vec(),
            settled: self.settled.clone(),
            window,
            pivot,
            ..Default::default()
        };
        self.steps.push(Step::new(state, message));
    }

    fn settle(&mut self, index: usize) {
        if !self.settled.contains(&index) {
            self.settled.push(index);
        }
    }

    fn finish(mut self) -> Vec<Step<ArrayState>> {
        self.settled = (0..self.arr.len()).collect();
        self.push(&[], None, None, "✓ Array is now sorted!".to_string());
        self.steps
    }
}

pub fn insertion_sort(array: &[i64]) -> Vec<Step<ArrayState>> {
    let mut rec = Recorder::new(
        array,
        format!("Starting insertion sort on {} element(s)", array.len()),
    );

    for i in 1..rec.arr.len() {
        let key = rec.arr[i];
        rec.push(
            &[i],
            Some((0, i)),
            None,
            format!("Selecting element {key} at index {i} to insert"),
        );

        let mut j = i;
        while j > 0 {
            let left = rec.arr[j - 1];
            rec.push(
                &[j - 1],
                Some((0, i)),
                None,
                format!("Comparing {left} with {key}"),
            );
            if left <= key {
                break;
            }
            rec.arr[j] = left;
            rec.push(
                &[j],
                Some((0, i)),
                None,
                format!("{left} > {key}, shifting right"),
            );
            j -= 1;
        }

        rec.arr[j] = key;
        rec.push(
            &[j],
            Some((0, i)),
            None,
            format!("Inserted {key} at position {j}"),
        );
    }

    rec.finish()
}

pub fn merge_sort(array: &[i64]) -> Vec<Step<ArrayState>> {
    let mut rec = Recorder::new(
        array,
        format!("Starting merge sort on {} element(s)", array.len()),
    );
    if !rec.arr.is_empty() {
        let high = rec.arr.len() - 1;
        merge_range(&mut rec, 0, high);
    }
    rec.finish()
}

fn merge_range(rec: &mut Recorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    rec.push(
        &[],
        Some((left, right)),
        None,
        format!("Dividing array from index {left} to {right}"),
    );

    let mid = left + (right - left) / 2;
    merge_range(rec, left, mid);
    merge_range(rec, mid + 1, right);

    let lower = rec.arr[left..=mid].to_vec();
    let upper = rec.arr[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lower.len() && j < upper.len() {
        rec.push(
            &[left + i, mid + 1 + j],
            Some((left, right)),
            None,
            format!("Merging: comparing {} and {}", lower[i], upper[j]),
        );
        let value = if lower[i] <= upper[j] {
            i += 1;
            lower[i - 1]
        } else {
            j += 1;
            upper[j - 1]
        };
        rec.arr[k] = value;
        rec.push(
            &[k],
            Some((left, right)),
            None,
            format!("Placed {value} at index {k}"),
        );
        k += 1;
    }

    for &value in lower[i..].iter().chain(&upper[j..]) {
        rec.arr[k] = value;
        rec.push(
            &[k],
            Some((left, right)),
            None,
            format!("Placed {value} at index {k}"),
        );
        k += 1;
    }

    rec.push(
        &[],
        Some((left, right)),
        None,
        format!("Merged subarray from index {left} to {right}"),
    );
}

pub fn quick_sort(array: &[i64]) -> Vec<Step<ArrayState>> {
    let mut rec = Recorder::new(
        array,
        format!("Starting quick sort on {} element(s)", array.len()),
    );
    if !rec.arr.is_empty() {
        let high = rec.arr.len() - 1;
        quick_range(&mut rec, 0, high);
    }
    rec.finish()
}

fn quick_range(rec: &mut Recorder, low: usize, high: usize) {
    if low > high {
        return;
    }
    if low == high {
        rec.settle(low);
        return;
    }

    let pivot = rec.arr[high];
    let window = Some((low, high));
    rec.push(
        &[],
        window,
        Some(high),
        format!("Pivot = {pivot} (index {high})"),
    );

    let mut i = low;
    for j in low..high {
        let value = rec.arr[j];
        rec.push(
            &[j],
            window,
            Some(high),
            format!("Comparing {value} with pivot {pivot}"),
        );
        if value < pivot {
            if i != j {
                let displaced = rec.arr[i];
                rec.arr.swap(i, j);
                rec.push(
                    &[i, j],
                    window,
                    Some(high),
                    format!("Swapped {value} and {displaced}"),
                );
            }
            i += 1;
        }
    }

    rec.arr.swap(i, high);
    rec.settle(i);
    rec.push(
        &[i],
        window,
        Some(i),
        format!("Pivot {pivot} placed at correct position {i}"),
    );

    if i > low {
        quick_range(rec, low, i - 1);
    }
    quick_range(rec, i + 1, high);
}

pub fn heap_sort(array: &[i64]) -> Vec<Step<ArrayState>> {
    let mut rec = Recorder::new(array, "Building max heap".to_string());
    let n = rec.arr.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, root, n);
    }
    if n > 0 {
        rec.push(&[], Some((0, n - 1)), None, "Max heap built".to_string());
    }

    for end in (1..n).rev() {
        let max = rec.arr[0];
        rec.arr.swap(0, end);
        rec.settle(end);
        rec.push(
            &[0, end],
            Some((0, end - 1)),
            None,
            format!("Moved max {max} to index {end}"),
        );
        sift_down(&mut rec, 0, end);
    }

    rec.finish()
}

/// Restore the max-heap property below `root` within `arr[..size]`
fn sift_down(rec: &mut Recorder, mut root: usize, size: usize) {
    let window = Some((0, size - 1));
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < size {
                rec.push(
                    &[child, largest],
                    window,
                    Some(root),
                    format!(
                        "Comparing {} (index {child}) with {} (index {largest})",
                        rec.arr[child], rec.arr[largest]
                    ),
                );
                if rec.arr[child] > rec.arr[largest] {
                    largest = child;
                }
            }
        }

        if largest == root {
            return;
        }
        let (a, b) = (rec.arr[root], rec.arr[largest]);
        rec.arr.swap(root, largest);
        rec.push(
            &[root, largest],
            window,
            Some(largest),
            format!("Swapped {a} and {b}"),
        );
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_result(steps: &[Step<ArrayState>]) -> Vec<i64> {
        steps.last().unwrap().state.values.clone()
    }

    #[test]
    fn test_insertion_sort_default() {
        let steps = insertion_sort(&[12, 11, 13, 5, 6, 7]);
        assert_eq!(sorted_result(&steps), vec![5, 6, 7, 11, 12, 13]);
        assert_eq!(steps[1].message, "Selecting element 11 at index 1 to insert");
        assert_eq!(steps[3].message, "12 > 11, shifting right");
        assert_eq!(steps[4].message, "Inserted 11 at position 0");
    }

    #[test]
    fn test_merge_sort_default() {
        let steps = merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(sorted_result(&steps), vec![3, 9, 10, 27, 38, 43, 82]);
        assert_eq!(steps[1].message, "Dividing array from index 0 to 6");
    }

    #[test]
    fn test_quick_sort_default() {
        let steps = quick_sort(&[10, 7, 8, 9, 1, 5]);
        assert_eq!(sorted_result(&steps), vec![1, 5, 7, 8, 9, 10]);
        assert_eq!(steps[1].message, "Pivot = 5 (index 5)");
    }

    #[test]
    fn test_heap_sort_default() {
        let steps = heap_sort(&[12, 11, 13, 5, 6, 7]);
        assert_eq!(sorted_result(&steps), vec![5, 6, 7, 11, 12, 13]);
        assert!(steps.iter().any(|s| s.message == "Moved max 13 to index 5"));
    }

    #[test]
    fn test_sorts_handle_empty_and_single() {
        let sorts: [fn(&[i64]) -> Vec<Step<ArrayState>>; 4] =
            [insertion_sort, merge_sort, quick_sort, heap_sort];
        for sort in sorts {
            assert_eq!(sort(&[]).len(), 2);
            assert_eq!(sorted_result(&sort(&[4])), vec![4]);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![3, 1, 2];
        let _ = quick_sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
    }
}
