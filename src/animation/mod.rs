//! Time-driven mutators of actor state.
//!
//! An animation is in exactly one of three states: not started (no start
//! time), running, or finished (`is_finished()` true). Owners, either the
//! [`Stage`](crate::stage::Stage) or a [`Sequence`](sequence::Sequence),
//! start animations on the first tick that sees them and reset repeating ones
//! once they finish.

pub mod color;
pub mod ease;
pub mod frames;
pub mod motion;
pub mod sequence;

/// A time-driven mutator bound to one actor.
///
/// `update` must be a pure function of the supplied timestamp: calling it
/// twice with the same time makes no further observable change.
pub trait Animation {
    /// Identifier used in log output.
    fn name(&self) -> &str;

    /// Total duration in seconds; 0 means instantaneous.
    fn duration(&self) -> f64;

    /// Whether the owner should reset and restart this animation once it
    /// finishes.
    fn repeats(&self) -> bool;

    /// `true` once `start` has recorded a start time (until `reset`).
    fn is_started(&self) -> bool;

    /// Record the start time and enter the running state.
    fn start(&mut self, now: f64);

    /// Advance actor state to the given timestamp.
    fn update(&mut self, now: f64);

    /// `true` when simulated elapsed time has exceeded the duration.
    fn is_finished(&self) -> bool;

    /// Return to the not-started state so the animation can run again.
    fn reset(&mut self);
}

/// Shared timing state for animation implementations.
///
/// Tracks the start time and the last `update` timestamp; "simulated" elapsed
/// time is the span between them, so an animation that is never updated never
/// finishes, no matter how much wall time passes.
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    duration: f64,
    repeat: bool,
    started_at: Option<f64>,
    updated_at: Option<f64>,
}

impl Timing {
    /// Create timing state for a given duration and repeat flag.
    pub fn new(duration: f64, repeat: bool) -> Self {
        Self {
            duration,
            repeat,
            started_at: None,
            updated_at: None,
        }
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Replace the duration (used by containers that aggregate children).
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Whether the animation should restart after finishing.
    pub fn repeats(&self) -> bool {
        self.repeat
    }

    /// `true` once a start time has been recorded.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Record the start time.
    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    /// Wall-clock seconds since start; 0 before start.
    pub fn elapsed(&self, now: f64) -> f64 {
        self.started_at.map_or(0.0, |s| (now - s).max(0.0))
    }

    /// Seconds between the start time and the last update; 0 before either.
    pub fn simulated(&self) -> f64 {
        match (self.started_at, self.updated_at) {
            (Some(s), Some(u)) => (u - s).max(0.0),
            _ => 0.0,
        }
    }

    /// Normalized time in `[0, 1]`: elapsed clamped to the duration, divided
    /// by the duration. Zero-duration animations report 0 rather than divide.
    pub fn fraction(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            0.0
        } else {
            self.elapsed(now).min(self.duration) / self.duration
        }
    }

    /// Record `now` as the last update time.
    pub fn mark_updated(&mut self, now: f64) {
        self.updated_at = Some(now);
    }

    /// `true` when simulated elapsed time strictly exceeds the duration.
    pub fn is_finished(&self) -> bool {
        self.simulated() > self.duration
    }

    /// Clear start and update times, returning to not-started.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.updated_at = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
