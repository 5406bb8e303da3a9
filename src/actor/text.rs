use std::rc::Rc;

use tracing::warn;

use crate::actor::{Actor, ActorState};
use crate::assets::raster::Raster;
use crate::assets::text::{TextRasterizer, TextStyle};
use crate::foundation::core::{Point, Rgba, Size};
use crate::render::canvas::Canvas;

/// A text label backed by a cached pre-rasterization.
///
/// The label re-rasterizes only when the text or style changes, never per
/// frame. The cached raster is padded by the stroke width on every side, so
/// it is blitted at `position - (stroke, stroke)` to keep the glyph origin at
/// `position`.
pub struct Text {
    base: ActorState,
    rasterizer: Rc<dyn TextRasterizer>,
    text: String,
    style: TextStyle,
    cached: Option<Raster>,
}

impl Text {
    /// Create a text actor; the initial rasterization happens immediately.
    pub fn new(
        name: impl Into<String>,
        position: Point,
        rasterizer: Rc<dyn TextRasterizer>,
        text: impl Into<String>,
        style: TextStyle,
    ) -> Self {
        let mut actor = Self {
            base: ActorState::new(name, position),
            rasterizer,
            text: text.into(),
            style,
            cached: None,
        };
        actor.rerasterize();
        actor
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text; a changed value re-rasterizes and marks dirty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.rerasterize();
        }
    }

    /// Replace the text color; a changed value re-rasterizes and marks dirty.
    pub fn set_color(&mut self, color: Rgba) {
        if self.style.color != color {
            self.style.color = color;
            self.rerasterize();
        }
    }

    /// Replace the stroke; a changed value re-rasterizes and marks dirty.
    pub fn set_stroke(&mut self, color: Rgba, width: u32) {
        if self.style.stroke_color != color || self.style.stroke_width != width {
            self.style.stroke_color = color;
            self.style.stroke_width = width;
            self.rerasterize();
        }
    }

    /// Replace the whole style; a changed value re-rasterizes and marks dirty.
    pub fn set_style(&mut self, style: TextStyle) {
        if self.style != style {
            self.style = style;
            self.rerasterize();
        }
    }

    fn rerasterize(&mut self) {
        self.cached = if self.text.is_empty() {
            None
        } else {
            match self.rasterizer.rasterize(&self.text, &self.style) {
                Ok(raster) => Some(raster),
                Err(error) => {
                    warn!(actor = self.base.name.as_str(), %error, "text rasterization failed");
                    None
                }
            }
        };
        let size = self.cached.as_ref().map_or(Size::default(), Raster::size);
        self.base.set_size(size);
        self.base.mark_dirty();
    }
}

impl Actor for Text {
    fn state(&self) -> &ActorState {
        &self.base
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut Canvas) {
        if let Some(raster) = &self.cached {
            let pad = self.style.stroke_width as i32;
            let dest = self.base.position.offset(-pad, -pad);
            canvas.composite_raster(raster, dest, None);
        }
        self.base.clear_dirty();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actor/text.rs"]
mod tests;
