use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::actor::image::{MultiFrameImage, SpriteImage};
use crate::animation::{Animation, Timing};

/// Callback that applies a frame identifier to an actor, e.g. selecting a
/// sprite by name or seeking a multi-frame image by index.
pub type ApplyFrame = Box<dyn FnMut(&str)>;

#[derive(Clone, Debug)]
struct FrameInfo {
    id: String,
    start: f64,
    duration: f64,
}

/// Steps an actor through an ordered list of frames, each shown for its own
/// duration.
///
/// Start offsets are precomputed cumulatively whenever frames are added; on
/// every update the frame whose `[start, start + duration)` interval contains
/// the elapsed time is applied. The total duration is the sum of all frame
/// durations.
pub struct FrameSequence {
    name: String,
    timing: Timing,
    frames: Vec<FrameInfo>,
    apply: ApplyFrame,
}

impl FrameSequence {
    /// Create an empty frame sequence around a frame-setter callback.
    pub fn new(name: impl Into<String>, repeat: bool, apply: ApplyFrame) -> Self {
        Self {
            name: name.into(),
            timing: Timing::new(0.0, repeat),
            frames: Vec::new(),
            apply,
        }
    }

    /// A sequence that selects sprites on a [`SpriteImage`] by name.
    pub fn for_sprite(
        name: impl Into<String>,
        sprite: Rc<RefCell<SpriteImage>>,
        repeat: bool,
    ) -> Self {
        Self::new(
            name,
            repeat,
            Box::new(move |frame| sprite.borrow_mut().set_sprite(frame)),
        )
    }

    /// A sequence that seeks a [`MultiFrameImage`] by frame index.
    ///
    /// Frame identifiers are decimal indices ("0", "1", ...), the scheme
    /// [`FrameSequence::push_indexed_frames`] generates.
    pub fn for_multi_frame(
        name: impl Into<String>,
        image: Rc<RefCell<MultiFrameImage>>,
        repeat: bool,
    ) -> Self {
        Self::new(
            name,
            repeat,
            Box::new(move |frame| {
                if let Ok(index) = frame.parse::<usize>() {
                    image.borrow_mut().set_frame(index);
                }
            }),
        )
    }

    /// Append one frame and recompute cumulative start offsets.
    pub fn add_frame(&mut self, id: impl Into<String>, duration: f64) {
        self.frames.push(FrameInfo {
            id: id.into(),
            start: 0.0,
            duration,
        });
        self.recompute_offsets();
    }

    /// Append indexed frames ("0", "1", ...) from decoded animation timing,
    /// as produced by [`decode_animation`](crate::assets::raster::decode_animation).
    pub fn push_indexed_frames(&mut self, durations: impl IntoIterator<Item = Duration>) {
        for (index, duration) in durations.into_iter().enumerate() {
            self.frames.push(FrameInfo {
                id: index.to_string(),
                start: 0.0,
                duration: duration.as_secs_f64(),
            });
        }
        self.recompute_offsets();
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when no frames have been added.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn recompute_offsets(&mut self) {
        let mut accumulated = 0.0;
        for frame in &mut self.frames {
            frame.start = accumulated;
            accumulated += frame.duration;
        }
        self.timing.set_duration(accumulated);
    }
}

impl Animation for FrameSequence {
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
        let elapsed = self.timing.elapsed(now);

        // Frame lists are short; a linear scan beats bookkeeping a cursor.
        let hit = self
            .frames
            .iter()
            .find(|f| f.start <= elapsed && elapsed < f.start + f.duration);

        match hit {
            Some(frame) => (self.apply)(&frame.id),
            None => debug!(
                animation = self.name.as_str(),
                elapsed, "no frame interval matches elapsed time"
            ),
        }
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
#[path = "../../tests/unit/animation/frames.rs"]
mod tests;
