// Play/pause/step/reset controller over a step trace

use crate::errors::TraceError;
use crate::step::{CancelToken, Step, StepLog, Trace};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default upper bound on materialized steps per run
pub const DEFAULT_MAX_STEPS: usize = 200_000;

/// Something that can run an algorithm against its stored input
pub trait StepGenerator {
    type State: 'static;

    /// Produce the full trace for the current input
    fn generate(&self, cancel: &CancelToken) -> Trace<Self::State>;

    /// Message shown before the first step is applied
    fn idle_message(&self) -> String;
}

/// Which state the controller is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No steps generated yet
    Idle,
    /// Steps available, timer stopped
    Ready,
    /// Timer running
    Playing,
    /// Every step applied
    Finished,
}

/// Drives a [`StepGenerator`]'s trace under play, pause, step and reset
pub struct AnimationController<G: StepGenerator> {
    /// Input the trace is generated from
    input: G,

    /// Steps materialized so far
    log: StepLog<G::State>,

    /// Remaining live producer, if the trace is lazy and not exhausted
    live: Option<Box<dyn Iterator<Item = Step<G::State>>>>,

    /// Whether the trace for the current input exists
    generated: bool,

    /// Number of steps applied (the next step to apply is `log[cursor]`)
    cursor: usize,

    /// Whether timer-driven playback is active
    playing: bool,

    /// Time between ticks while playing
    interval: Duration,

    /// Instant of the last tick, `None` forces the next poll to tick
    last_tick: Option<Instant>,

    /// Token handed to live producers; replaced on every reset
    cancel: CancelToken,
}

impl<G: StepGenerator> AnimationController<G> {
    pub fn new(input: G, interval: Duration, max_steps: usize) -> Self {
        AnimationController {
            input,
            log: StepLog::new(max_steps),
            live: None,
            generated: false,
            cursor: 0,
            playing: false,
            interval,
            last_tick: None,
            cancel: CancelToken::new(),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if !self.generated {
            PlaybackStatus::Idle
        } else if self.playing {
            PlaybackStatus::Playing
        } else if self.is_exhausted() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Ready
        }
    }

    /// Start (or resume) timer-driven playback
    pub fn play(&mut self) {
        match self.status() {
            PlaybackStatus::Idle => {
                self.ensure_generated();
                self.playing = true;
                self.last_tick = None;
            }
            PlaybackStatus::Ready => {
                self.playing = true;
                self.last_tick = None;
            }
            PlaybackStatus::Playing | PlaybackStatus::Finished => {}
        }
        debug!(status = ?self.status(), position = self.cursor, "play");
    }

    /// Stop the timer, keeping position and steps
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            debug!(position = self.cursor, "pause");
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Apply exactly one step. Disabled while playing.
    pub fn step(&mut self) -> Option<&Step<G::State>> {
        if self.playing {
            return None;
        }
        self.ensure_generated();
        self.advance()
    }

    /// One timer tick: apply the next step, or stop when none remain
    pub fn tick(&mut self) -> Option<&Step<G::State>> {
        if !self.playing {
            return None;
        }
        if self.fill_next() {
            self.cursor += 1;
            return self.log.get(self.cursor - 1);
        }
        self.playing = false;
        debug!(steps = self.log.len(), "playback finished");
        None
    }

    /// Tick if playing and the interval has elapsed since the last tick.
    /// Returns whether a step was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let due = self
            .last_tick
            .map_or(true, |last| now.saturating_duration_since(last) >= self.interval);
        if !due {
            return false;
        }
        self.last_tick = Some(now);
        self.tick().is_some()
    }

    /// Apply every remaining step. Returns how many were applied.
    pub fn skip_to_end(&mut self) -> usize {
        self.playing = false;
        self.ensure_generated();
        let mut applied = 0;
        while self.fill_next() {
            self.cursor += 1;
            applied += 1;
        }
        applied
    }

    /// Back to `Idle`: drop steps, cancel any live producer
    pub fn reset(&mut self) {
        self.cancel.cancel();
        self.cancel = CancelToken::new();
        self.live = None;
        self.log.clear();
        self.generated = false;
        self.cursor = 0;
        self.playing = false;
        self.last_tick = None;
    }

    /// Replace the input. Resets first so stale steps are never replayed.
    pub fn apply(&mut self, input: G) {
        self.reset();
        self.input = input;
        debug!("input applied");
    }

    /// Last applied step
    pub fn current(&self) -> Option<&Step<G::State>> {
        self.cursor.checked_sub(1).and_then(|i| self.log.get(i))
    }

    /// Message of the last applied step, or the idle message
    pub fn message(&self) -> String {
        match self.current() {
            Some(step) => step.message.clone(),
            None => self.input.idle_message(),
        }
    }

    pub fn input(&self) -> &G {
        &self.input
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of steps materialized so far (the total, once exhausted)
    pub fn known_len(&self) -> usize {
        self.log.len()
    }

    /// Whether the producer can yield no more steps beyond those materialized
    pub fn is_exhausted(&self) -> bool {
        self.generated && self.live.is_none() && self.cursor >= self.log.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn ensure_generated(&mut self) {
        if self.generated {
            return;
        }
        match self.input.generate(&self.cancel) {
            Trace::Recorded(steps) => {
                debug!(steps = steps.len(), "recorded trace generated");
                if let Err(e) = self.log.extend(steps) {
                    self.report_overflow(e);
                }
            }
            Trace::Live(iter) => {
                debug!("live trace installed");
                self.live = Some(iter);
            }
        }
        self.generated = true;
    }

    /// Make sure `log[cursor]` exists, pulling from the live producer if needed
    fn fill_next(&mut self) -> bool {
        if self.cursor < self.log.len() {
            return true;
        }
        let Some(iter) = self.live.as_mut() else {
            return false;
        };
        match iter.next() {
            Some(step) => match self.log.push(step) {
                Ok(()) => true,
                Err(e) => {
                    self.report_overflow(e);
                    false
                }
            },
            None => {
                self.live = None;
                false
            }
        }
    }

    fn advance(&mut self) -> Option<&Step<G::State>> {
        if self.fill_next() {
            self.cursor += 1;
            self.log.get(self.cursor - 1)
        } else {
            None
        }
    }

    fn report_overflow(&mut self, error: TraceError) {
        warn!(%error, "trace truncated");
        self.cancel.cancel();
        self.live = None;
    }
}

impl<G: StepGenerator> Drop for AnimationController<G> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
