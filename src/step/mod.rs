// Step recording for replayable algorithm traces

use crate::errors::TraceError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One recorded instant of an algorithm run
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub state: S,
    pub message: String,
}

impl<S> Step<S> {
    pub fn new(state: S, message: impl Into<String>) -> Self {
        Step {
            state,
            message: message.into(),
        }
    }

    /// Convert the state while keeping the message
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Step<T> {
        Step {
            state: f(self.state),
            message: self.message,
        }
    }
}

/// Shared cancellation flag checked by live producers at every suspension point
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// A producer of ordered steps.
///
/// `Recorded` traces are computed in full before playback. `Live` traces yield
/// one step per `next()` and do no work between pulls, so backtracking searches
/// keep their natural control flow without being flattened up front.
pub enum Trace<S> {
    Recorded(Vec<Step<S>>),
    Live(Box<dyn Iterator<Item = Step<S>>>),
}

impl<S: 'static> Trace<S> {
    /// Wrap a lazy producer so it stops as soon as `cancel` fires
    pub fn live<I>(iter: I, cancel: &CancelToken) -> Self
    where
        I: Iterator<Item = Step<S>> + 'static,
    {
        Trace::Live(Box::new(Cancellable {
            inner: iter,
            cancel: cancel.clone(),
        }))
    }

    pub fn map<T: 'static>(self, f: fn(S) -> T) -> Trace<T> {
        match self {
            Trace::Recorded(steps) => {
                Trace::Recorded(steps.into_iter().map(|s| s.map(f)).collect())
            }
            Trace::Live(iter) => Trace::Live(Box::new(iter.map(move |s| s.map(f)))),
        }
    }

    /// Drain the whole trace. Live producers run to completion (or cancellation).
    pub fn collect_steps(self) -> Vec<Step<S>> {
        match self {
            Trace::Recorded(steps) => steps,
            Trace::Live(iter) => iter.collect(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Trace::Live(_))
    }
}

impl<S> fmt::Debug for Trace<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trace::Recorded(steps) => write!(f, "Trace::Recorded({} steps)", steps.len()),
            Trace::Live(_) => write!(f, "Trace::Live(..)"),
        }
    }
}

/// Checks the token before pulling, so a cancelled producer does no more work
struct Cancellable<I> {
    inner: I,
    cancel: CancelToken,
}

impl<I: Iterator> Iterator for Cancellable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.inner.next()
    }
}

/// Materialized steps for the current run, bounded by a step limit
#[derive(Debug)]
pub struct StepLog<S> {
    steps: Vec<Step<S>>,
    max_steps: usize,
}

impl<S> StepLog<S> {
    pub fn new(max_steps: usize) -> Self {
        StepLog {
            steps: Vec::new(),
            max_steps,
        }
    }

    /// Add a step to the log
    pub fn push(&mut self, step: Step<S>) -> Result<(), TraceError> {
        if self.steps.len() >= self.max_steps {
            return Err(TraceError::StepLimitExceeded {
                limit: self.max_steps,
            });
        }
        self.steps.push(step);
        Ok(())
    }

    /// Add recorded steps, stopping at the limit
    pub fn extend(&mut self, steps: Vec<Step<S>>) -> Result<(), TraceError> {
        for step in steps {
            self.push(step)?;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_log_limit() {
        let mut log = StepLog::new(2);
        assert!(log.push(Step::new(1, "one")).is_ok());
        assert!(log.push(Step::new(2, "two")).is_ok());
        assert_eq!(
            log.push(Step::new(3, "three")),
            Err(TraceError::StepLimitExceeded { limit: 2 })
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_live_trace_stops_when_cancelled() {
        let cancel = CancelToken::new();
        let trace = Trace::live((0..).map(|i| Step::new(i, format!("step {i}"))), &cancel);
        let Trace::Live(mut iter) = trace else {
            panic!("expected live trace");
        };
        assert_eq!(iter.next().map(|s| s.state), Some(0));
        assert_eq!(iter.next().map(|s| s.state), Some(1));
        cancel.cancel();
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_map_keeps_message() {
        let trace = Trace::Recorded(vec![Step::new(2, "two")]).map(|v: i32| v * 10);
        let steps = trace.collect_steps();
        assert_eq!(steps, vec![Step::new(20, "two")]);
    }
}
