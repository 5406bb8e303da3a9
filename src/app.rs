//! The paced outer loop that drives a stage.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::foundation::core::FrameRate;
use crate::foundation::error::LedstageResult;
use crate::stage::Stage;

/// Monotonic time source; ticks are stamped with seconds since its creation.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created.
    pub fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Cooperative stop flag, polled once per tick.
///
/// Clone the token and call [`CancelToken::cancel`] from a signal handler or
/// another thread; the loop stops within one tick, never pre-empting a
/// render in flight.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// `true` once [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Scene callbacks supplied by the application.
///
/// The runner calls in; the engine never calls back out beyond these two
/// hooks.
pub trait App {
    /// One-time scene setup: construct actors and animations and put them on
    /// the stage. Errors here are fatal and abort the run.
    fn prepare(&mut self, stage: &mut Stage) -> LedstageResult<()>;

    /// Per-tick scene mutation, called before the stage tick with the
    /// seconds since the previous call (0.0 on the first). Errors are logged
    /// and the loop continues.
    fn update_view(&mut self, stage: &mut Stage, elapsed: f64) -> LedstageResult<()> {
        let _ = (stage, elapsed);
        Ok(())
    }
}

/// Runs an [`App`] against a [`Stage`] at up to a maximum frame rate.
///
/// Each tick is timed and the remainder of the frame interval is slept away,
/// so ticks never run faster than the cap; they may run slower, bounded by
/// the sink's swap latency.
pub struct AppRunner {
    stage: Stage,
    clock: Clock,
    max_frame_rate: FrameRate,
    cancel: CancelToken,
}

impl AppRunner {
    /// Create a runner pacing `stage` at up to `max_frame_rate`.
    pub fn new(stage: Stage, max_frame_rate: FrameRate) -> Self {
        Self {
            stage,
            clock: Clock::new(),
            max_frame_rate,
            cancel: CancelToken::new(),
        }
    }

    /// A token that stops the loop when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Borrow the stage, e.g. to inspect it after the loop stops.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutably borrow the stage between runs.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Prepare the app and tick until cancelled.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, app: &mut dyn App) -> LedstageResult<()> {
        app.prepare(&mut self.stage)?;
        debug!(fps = self.max_frame_rate.fps(), "entering frame loop");

        let min_tick = self.max_frame_rate.min_tick_secs();
        let mut previous_view: Option<f64> = None;

        while !self.cancel.is_cancelled() {
            let tick_start = self.clock.now_secs();

            let elapsed = previous_view.map_or(0.0, |t| tick_start - t);
            previous_view = Some(tick_start);
            if let Err(error) = app.update_view(&mut self.stage, elapsed) {
                warn!(%error, "view update failed; continuing");
            }

            self.stage.tick_at(tick_start);

            let remaining = min_tick - (self.clock.now_secs() - tick_start);
            if remaining > 0.0 {
                std::thread::sleep(Duration::from_secs_f64(remaining));
            }
        }
        debug!("frame loop cancelled");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
