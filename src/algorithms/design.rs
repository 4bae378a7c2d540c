// Divide and conquer min/max, stepped one frame at a time

use super::ArrayState;
use crate::step::{CancelToken, Step, Trace};

#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Announce the range `[low, high]`
    Enter(usize, usize),
    /// Solve a range of one or two elements directly
    Base(usize, usize),
    Divide(usize, usize),
    /// Merge the two topmost results for `[low, mid]` and `[mid + 1, high]`
    Combine(usize, usize, usize),
}

struct MinMax {
    values: Vec<i64>,
    frames: Vec<Frame>,
    /// `(min, max)` of solved subranges, innermost last
    results: Vec<(i64, i64)>,
    started: bool,
    done: bool,
}

impl MinMax {
    fn new(values: &[i64]) -> Self {
        let frames = if values.is_empty() {
            Vec::new()
        } else {
            vec![Frame::Enter(0, values.len() - 1)]
        };
        MinMax {
            values: values.to_vec(),
            frames,
            results: Vec::new(),
            started: false,
            done: false,
        }
    }

    fn state(&self, low: usize, high: usize) -> ArrayState {
        let mut state = ArrayState::new(self.values.clone());
        state.window = Some((low, high));
        if let Some(&(min, max)) = self.results.last() {
            state.min = Some(min);
            state.max = Some(max);
        }
        state
    }

    fn finish(&mut self) -> Step<ArrayState> {
        self.done = true;
        let mut state = ArrayState::new(self.values.clone());
        match self.results.last() {
            Some(&(min, max)) => {
                state.min = Some(min);
                state.max = Some(max);
                state.found = self.values.iter().position(|&v| v == min);
                state.marker = self.values.iter().position(|&v| v == max);
                Step::new(
                    state,
                    format!("Done! Global Minimum: {min}, Global Maximum: {max}"),
                )
            }
            None => Step::new(state, "Done! The array is empty"),
        }
    }
}

impl Iterator for MinMax {
    type Item = Step<ArrayState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Step::new(
                ArrayState::new(self.values.clone()),
                format!(
                    "Finding minimum and maximum of {} element(s)",
                    self.values.len()
                ),
            ));
        }

        let Some(frame) = self.frames.pop() else {
            return Some(self.finish());
        };

        let step = match frame {
            Frame::Enter(low, high) => {
                if high - low <= 1 {
                    self.frames.push(Frame::Base(low, high));
                } else {
                    self.frames.push(Frame::Divide(low, high));
                }
                Step::new(
                    self.state(low, high),
                    format!("Processing range [{low}, {high}]"),
                )
            }
            Frame::Base(low, high) => {
                let (a, b) = (self.values[low], self.values[high]);
                self.results.push((a.min(b), a.max(b)));
                let mut state = self.state(low, high);
                state.active = (low..=high).collect();
                let message = if low == high {
                    format!("Base case: Single element {a}")
                } else {
                    format!("Base case: Two elements {a}, {b}")
                };
                Step::new(state, message)
            }
            Frame::Divide(low, high) => {
                let mid = low + (high - low) / 2;
                self.frames.push(Frame::Combine(low, mid, high));
                self.frames.push(Frame::Enter(mid + 1, high));
                self.frames.push(Frame::Enter(low, mid));
                let mut state = self.state(low, high);
                state.marker = Some(mid);
                Step::new(state, format!("Dividing at index {mid}"))
            }
            Frame::Combine(low, _, high) => {
                let (Some((min2, max2)), Some((min1, max1))) = (self.results.pop(), self.results.pop())
                else {
                    return Some(self.finish());
                };
                let (min, max) = (min1.min(min2), max1.max(max2));
                self.results.push((min, max));
                Step::new(
                    self.state(low, high),
                    format!(
                        "Combining: Left[{min1}, {max1}] vs Right[{min2}, {max2}] -> Min: {min}, Max: {max}"
                    ),
                )
            }
        };
        Some(step)
    }
}

pub fn min_max(values: &[i64], cancel: &CancelToken) -> Trace<ArrayState> {
    Trace::live(MinMax::new(values), cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i64]) -> Vec<Step<ArrayState>> {
        min_max(values, &CancelToken::new()).collect_steps()
    }

    #[test]
    fn test_default_array() {
        let steps = run(&[1000, 11, 445, 1, 330, 3000]);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Done! Global Minimum: 1, Global Maximum: 3000");
        assert_eq!(last.state.min, Some(1));
        assert_eq!(last.state.max, Some(3000));
        assert_eq!(steps[1].message, "Processing range [0, 5]");
        assert_eq!(steps[2].message, "Dividing at index 2");
    }

    #[test]
    fn test_single_element() {
        let messages: Vec<_> = run(&[42]).into_iter().map(|s| s.message).collect();
        assert_eq!(
            messages,
            vec![
                "Finding minimum and maximum of 1 element(s)",
                "Processing range [0, 0]",
                "Base case: Single element 42",
                "Done! Global Minimum: 42, Global Maximum: 42",
            ]
        );
    }

    #[test]
    fn test_empty_array() {
        let steps = run(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].message, "Done! The array is empty");
    }

    #[test]
    fn test_combine_order_left_then_right() {
        let steps = run(&[5, 9, 2]);
        let combine = steps
            .iter()
            .find(|s| s.message.starts_with("Combining"))
            .unwrap();
        assert_eq!(
            combine.message,
            "Combining: Left[5, 9] vs Right[2, 2] -> Min: 2, Max: 9"
        );
    }
}
