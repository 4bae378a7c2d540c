// N-Queens backtracking as a resumable state machine
//
// Each call to `next()` performs exactly one placement attempt or one
// backtrack, so the search can be paused or cancelled between any two moves.

use super::BoardState;
use crate::step::{CancelToken, Step, Trace};

/// Largest board the input panel accepts
pub const MAX_BOARD: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Search,
    Done,
}

#[derive(Debug)]
struct QueenSearch {
    size: usize,
    queens: Vec<usize>,
    /// Next column to try in row `queens.len()`
    next_col: usize,
    phase: Phase,
}

impl QueenSearch {
    fn new(size: usize) -> Self {
        QueenSearch {
            size,
            queens: Vec::with_capacity(size),
            next_col: 0,
            phase: Phase::Start,
        }
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        self.queens.iter().enumerate().all(|(r, &c)| {
            c != col && row.abs_diff(r) != col.abs_diff(c)
        })
    }

    fn board(&self, probe: Option<(usize, usize)>, conflict: bool, solved: bool) -> BoardState {
        BoardState {
            size: self.size,
            queens: self.queens.clone(),
            probe,
            conflict,
            solved,
        }
    }
}

impl Iterator for QueenSearch {
    type Item = Step<BoardState>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::Start => {
                self.phase = Phase::Search;
                Some(Step::new(self.board(None, false, false), "Starting search..."))
            }
            Phase::Search => {
                let row = self.queens.len();
                if row == self.size {
                    self.phase = Phase::Done;
                    return Some(Step::new(self.board(None, false, true), "Solution found!"));
                }

                if self.next_col < self.size {
                    let col = self.next_col;
                    self.next_col += 1;
                    if self.is_safe(row, col) {
                        self.queens.push(col);
                        self.next_col = 0;
                        return Some(Step::new(
                            self.board(Some((row, col)), false, false),
                            format!("Placed queen at ({row}, {col})"),
                        ));
                    }
                    return Some(Step::new(
                        self.board(Some((row, col)), true, false),
                        format!("Conflict at ({row}, {col})"),
                    ));
                }

                match self.queens.pop() {
                    Some(col) => {
                        self.next_col = col + 1;
                        Some(Step::new(
                            self.board(Some((row - 1, col)), false, false),
                            format!("Backtracking from ({}, {col})", row - 1),
                        ))
                    }
                    None => {
                        self.phase = Phase::Done;
                        Some(Step::new(self.board(None, false, false), "No solution found."))
                    }
                }
            }
        }
    }
}

/// Lazily search for the first solution on an `n`×`n` board
pub fn n_queens(n: usize, cancel: &CancelToken) -> Trace<BoardState> {
    Trace::live(QueenSearch::new(n), cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: usize) -> Vec<Step<BoardState>> {
        n_queens(n, &CancelToken::new()).collect_steps()
    }

    #[test]
    fn test_four_queens_first_solution() {
        let steps = run(4);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Solution found!");
        assert_eq!(last.state.queens, vec![1, 3, 0, 2]);
        assert!(last.state.solved);
        assert_eq!(steps[0].message, "Starting search...");
    }

    #[test]
    fn test_three_queens_has_no_solution() {
        let steps = run(3);
        assert_eq!(steps.last().unwrap().message, "No solution found.");
        assert!(steps.iter().any(|s| s.message.starts_with("Backtracking")));
    }

    #[test]
    fn test_single_queen() {
        let messages: Vec<_> = run(1).into_iter().map(|s| s.message).collect();
        assert_eq!(
            messages,
            vec!["Starting search...", "Placed queen at (0, 0)", "Solution found!"]
        );
    }

    #[test]
    fn test_cancel_stops_search() {
        let cancel = CancelToken::new();
        let Trace::Live(mut iter) = n_queens(8, &cancel) else {
            panic!("expected live trace");
        };
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        cancel.cancel();
        assert!(iter.next().is_none());
    }
}
