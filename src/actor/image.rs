use tracing::debug;

use crate::actor::{Actor, ActorState};
use crate::assets::raster::{Raster, decode_image};
use crate::assets::sprite::SpriteSheetSpec;
use crate::foundation::core::{Point, Size};
use crate::foundation::error::LedstageResult;
use crate::render::canvas::Canvas;

/// An unchanging image composited at its position.
///
/// Rendering with no image content is a no-op.
pub struct StillImage {
    base: ActorState,
    image: Option<Raster>,
}

impl StillImage {
    /// Create a still image actor; `image` may be set later.
    pub fn new(name: impl Into<String>, position: Point, image: Option<Raster>) -> Self {
        let mut base = ActorState::new(name, position);
        if let Some(img) = &image {
            base.set_size(img.size());
        }
        Self { base, image }
    }

    /// Replace the image content in place.
    pub fn set_image(&mut self, image: Option<Raster>) {
        let size = image.as_ref().map_or(Size::default(), Raster::size);
        self.image = image;
        self.base.set_size(size);
        self.base.mark_dirty();
    }

    /// Load and decode image file contents into this actor.
    pub fn set_from_bytes(&mut self, bytes: &[u8]) -> LedstageResult<()> {
        self.set_image(Some(decode_image(bytes)?));
        Ok(())
    }
}

impl Actor for StillImage {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        if let Some(image) = &self.image {
            canvas.composite_raster(image, self.base.position, None);
        }
        self.base.clear_dirty();
    }
}

/// A named rectangular crop of a shared sprite sheet.
///
/// Selecting an unknown sprite name is not an error: the actor takes zero
/// size and renders nothing.
pub struct SpriteImage {
    base: ActorState,
    sheet: Option<Raster>,
    spec: SpriteSheetSpec,
    selected: Option<String>,
}

impl SpriteImage {
    /// Create a sprite actor over a sheet and its region spec.
    pub fn new(
        name: impl Into<String>,
        position: Point,
        sheet: Option<Raster>,
        spec: SpriteSheetSpec,
    ) -> Self {
        Self {
            base: ActorState::new(name, position),
            sheet,
            spec,
            selected: None,
        }
    }

    /// Select which sprite to display.
    pub fn set_sprite(&mut self, selected: &str) {
        if self.selected.as_deref() != Some(selected) {
            self.base.mark_dirty();
        }
        self.selected = Some(selected.to_owned());

        match self.spec.region(selected) {
            Some(region) if self.sheet.is_some() => self.base.set_size(region.size),
            _ => {
                debug!(
                    actor = self.base.name.as_str(),
                    sprite = selected,
                    "unknown sprite selection"
                );
                self.base.set_size(Size::default());
            }
        }
    }

    /// Currently selected sprite name, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replace the sheet raster and region spec in place.
    pub fn set_sheet(&mut self, sheet: Raster, spec: SpriteSheetSpec) {
        self.sheet = Some(sheet);
        self.spec = spec;
        self.base.mark_dirty();
        if let Some(selected) = self.selected.clone() {
            self.set_sprite(&selected);
        }
    }

    /// Load the sheet image and JSON spec from files.
    pub fn set_from_files(
        &mut self,
        image_path: impl AsRef<std::path::Path>,
        spec_path: impl AsRef<std::path::Path>,
    ) -> LedstageResult<()> {
        debug!(path = %image_path.as_ref().display(), "loading sprite sheet image");
        let sheet = crate::assets::raster::load_image(image_path)?;
        debug!(path = %spec_path.as_ref().display(), "loading sprite spec");
        let spec = SpriteSheetSpec::from_file(spec_path)?;
        self.set_sheet(sheet, spec);
        Ok(())
    }
}

impl Actor for SpriteImage {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        if let (Some(sheet), Some(selected)) = (&self.sheet, self.selected.as_deref()) {
            if let Some(region) = self.spec.region(selected) {
                canvas.composite_raster(sheet, self.base.position, Some(region));
            }
        }
        self.base.clear_dirty();
    }
}

/// An ordered list of rasters with one current frame.
///
/// Pair with [`FrameSequence::for_multi_frame`](crate::animation::frames::FrameSequence::for_multi_frame)
/// to play decoded GIF animations.
pub struct MultiFrameImage {
    base: ActorState,
    frames: Vec<Raster>,
    current: usize,
}

impl MultiFrameImage {
    /// Create a multi-frame image from its frames; frame 0 is current.
    pub fn new(name: impl Into<String>, position: Point, frames: Vec<Raster>) -> Self {
        let mut base = ActorState::new(name, position);
        if let Some(first) = frames.first() {
            base.set_size(first.size());
        }
        Self {
            base,
            frames,
            current: 0,
        }
    }

    /// Select the frame to display; out-of-range indices are ignored with a
    /// debug note.
    pub fn set_frame(&mut self, index: usize) {
        if index >= self.frames.len() {
            debug!(
                actor = self.base.name.as_str(),
                index,
                frames = self.frames.len(),
                "ignoring out-of-range frame index"
            );
            return;
        }
        if self.current != index {
            self.current = index;
            self.base.set_size(self.frames[index].size());
            self.base.mark_dirty();
        }
    }

    /// Index of the displayed frame.
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Actor for MultiFrameImage {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        if let Some(frame) = self.frames.get(self.current) {
            canvas.composite_raster(frame, self.base.position, None);
        }
        self.base.clear_dirty();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actor/image.rs"]
mod tests;
