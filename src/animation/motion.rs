use tracing::debug;

use crate::actor::ActorRef;
use crate::animation::ease::Easing;
use crate::animation::{Animation, Timing};

/// A no-op animation that occupies time, used to pause inside a
/// [`Sequence`](crate::animation::sequence::Sequence).
pub struct Still {
    name: String,
    timing: Timing,
}

impl Still {
    /// Create a hold of the given duration.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(duration, false),
        }
    }
}

impl Animation for Still {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.timing.duration()
    }

    fn repeats(&self) -> bool {
        self.timing.repeats()
    }

    fn is_started(&self) -> bool {
        self.timing.is_started()
    }

    fn start(&mut self, now: f64) {
        self.timing.start(now);
    }

    fn update(&mut self, now: f64) {
        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    fn reset(&mut self) {
        self.timing.reset();
    }
}

/// Moves an actor a fixed distance over a period of time.
///
/// Movement is additive: each update applies only the net delta between the
/// displacement the easing curve calls for now and the displacement already
/// applied, so several movers can share one actor, re-evaluating the same
/// timestamp changes nothing, and the total displacement is exactly
/// `distance` once the animation completes regardless of sampling frequency.
pub struct StraightMove {
    name: String,
    timing: Timing,
    actor: ActorRef,
    distance: (i32, i32),
    easing: Easing,
    accumulated: (i32, i32),
}

impl StraightMove {
    /// Create a move of `distance` pixels over `duration` seconds.
    pub fn new(
        name: impl Into<String>,
        actor: ActorRef,
        distance: (i32, i32),
        duration: f64,
        easing: Easing,
        repeat: bool,
    ) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(duration, repeat),
            actor,
            distance,
            easing,
            accumulated: (0, 0),
        }
    }

    /// Displacement applied so far.
    pub fn accumulated(&self) -> (i32, i32) {
        self.accumulated
    }
}

impl Animation for StraightMove {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.timing.duration()
    }

    fn repeats(&self) -> bool {
        self.timing.repeats()
    }

    fn is_started(&self) -> bool {
        self.timing.is_started()
    }

    fn start(&mut self, now: f64) {
        self.timing.start(now);
    }

    fn update(&mut self, now: f64) {
        let progress = self.easing.apply(self.timing.fraction(now));

        let dx = (f64::from(self.distance.0) * progress).round() as i32;
        let dy = (f64::from(self.distance.1) * progress).round() as i32;
        let net = (dx - self.accumulated.0, dy - self.accumulated.1);

        if net != (0, 0) {
            let mut actor = self.actor.borrow_mut();
            let pos = actor.position().offset(net.0, net.1);
            actor.set_position(pos);
        }
        self.accumulated = (self.accumulated.0 + net.0, self.accumulated.1 + net.1);

        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    fn reset(&mut self) {
        self.timing.reset();
        self.accumulated = (0, 0);
    }
}

// A zero duration would finish only strictly after its start time, which is
// still one tick; keep the tiny positive duration the visibility setters have
// always used so they occupy exactly one slot in a sequence.
const VISIBILITY_FLIP_DURATION: f64 = 0.001;

/// Near-instant visibility setter; use [`VisibilityFlip::show`] and
/// [`VisibilityFlip::hide`] inside sequences to reveal or conceal an actor at
/// a chosen point in time.
pub struct VisibilityFlip {
    name: String,
    timing: Timing,
    actor: ActorRef,
    visible: bool,
}

impl VisibilityFlip {
    /// A step that makes `actor` visible.
    pub fn show(name: impl Into<String>, actor: ActorRef) -> Self {
        Self::new(name.into(), actor, true)
    }

    /// A step that hides `actor`.
    pub fn hide(name: impl Into<String>, actor: ActorRef) -> Self {
        Self::new(name.into(), actor, false)
    }

    fn new(name: String, actor: ActorRef, visible: bool) -> Self {
        Self {
            name,
            timing: Timing::new(VISIBILITY_FLIP_DURATION, false),
            actor,
            visible,
        }
    }
}

impl Animation for VisibilityFlip {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.timing.duration()
    }

    fn repeats(&self) -> bool {
        false
    }

    fn is_started(&self) -> bool {
        self.timing.is_started()
    }

    fn start(&mut self, now: f64) {
        self.timing.start(now);
    }

    fn update(&mut self, now: f64) {
        let mut actor = self.actor.borrow_mut();
        if actor.is_visible() != self.visible {
            debug!(actor = actor.name(), visible = self.visible, "flipping visibility");
            actor.set_visible(self.visible);
        }
        drop(actor);
        self.timing.mark_updated(now);
    }

    fn is_finished(&self) -> bool {
        self.timing.is_finished()
    }

    fn reset(&mut self) {
        self.timing.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
