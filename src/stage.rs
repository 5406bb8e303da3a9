//! The per-tick update/render/swap cycle.

use tracing::debug;

use crate::actor::ActorRef;
use crate::animation::Animation;
use crate::display::sink::{FrameBuffer, FrameSink};
use crate::foundation::core::Point;
use crate::render::canvas::Canvas;

/// Owns the scene: an ordered actor list, the active animations, one canvas,
/// and the double-buffered hand-off to the frame sink.
///
/// Render order is list order; later actors draw on top. A tick always
/// advances every animation but renders only when some actor is dirty, so an
/// unchanged scene costs no pixel work and sends nothing to the sink.
///
/// The stage is single-threaded; callers may add or remove actors and
/// animations between ticks, never during one.
pub struct Stage {
    canvas: Canvas,
    actors: Vec<ActorRef>,
    animations: Vec<Box<dyn Animation>>,
    sink: Box<dyn FrameSink>,
    buffer: FrameBuffer,
    offset: Point,
}

impl Stage {
    /// Create a stage rendering `canvas` onto `sink`.
    pub fn new(canvas: Canvas, mut sink: Box<dyn FrameSink>) -> Self {
        let buffer = sink.create_buffer();
        Self {
            canvas,
            actors: Vec::new(),
            animations: Vec::new(),
            sink,
            buffer,
            offset: Point::new(0, 0),
        }
    }

    /// Offset the canvas on the panel, for displays larger than the scene.
    pub fn set_panel_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Append an actor; it draws on top of everything added before it.
    pub fn add_actor(&mut self, actor: ActorRef) {
        self.actors.push(actor);
    }

    /// Activate an animation; it starts on the next tick.
    pub fn add_animation(&mut self, animation: Box<dyn Animation>) {
        self.animations.push(animation);
    }

    /// Activate several animations at once.
    pub fn add_animations(&mut self, animations: impl IntoIterator<Item = Box<dyn Animation>>) {
        self.animations.extend(animations);
    }

    /// Drop every actor and animation.
    pub fn clear(&mut self) {
        self.actors.clear();
        self.animations.clear();
    }

    /// Number of actors on the stage.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of active animations.
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Borrow the scene canvas, e.g. to inspect rendered pixels.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// `true` when some actor changed since the last rendered frame.
    pub fn needs_render(&self) -> bool {
        self.actors.iter().any(|actor| actor.borrow().is_dirty())
    }

    /// Run one tick at the sampled time `now` (seconds on a monotonic clock).
    ///
    /// Animations advance whether or not a redraw happens, so their clocks
    /// stay wall-accurate across skipped-render frames. Finished animations
    /// are pruned afterwards; repeating ones are reset instead and restart on
    /// the next tick.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tick_at(&mut self, now: f64) {
        for animation in &mut self.animations {
            if !animation.is_started() {
                animation.start(now);
            }
            animation.update(now);
        }

        if self.needs_render() {
            self.render_frame();
        }

        self.animations.retain_mut(|animation| {
            if !animation.is_finished() {
                return true;
            }
            if animation.repeats() {
                animation.reset();
                true
            } else {
                debug!(animation = animation.name(), "pruning finished animation");
                false
            }
        });
    }

    fn render_frame(&mut self) {
        self.canvas.blank();
        for actor in &self.actors {
            let mut actor = actor.borrow_mut();
            if actor.is_visible() {
                actor.render(&mut self.canvas);
            } else {
                // A freshly hidden actor is erased by this blank-and-redraw
                // frame; clearing its flag keeps it from forcing another.
                actor.clear_dirty();
            }
        }

        self.buffer.set_image(self.canvas.raster(), self.offset);
        let staged = std::mem::take(&mut self.buffer);
        self.buffer = self.sink.swap_on_vsync(staged);
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
