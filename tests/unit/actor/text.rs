use super::*;

use std::cell::Cell;

use crate::foundation::core::Size;
use crate::foundation::error::LedstageResult;

/// Draws each glyph as a 4x6 block of the fill color, padded by the stroke.
struct BlockRasterizer {
    calls: Cell<usize>,
}

impl BlockRasterizer {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            calls: Cell::new(0),
        })
    }
}

impl TextRasterizer for BlockRasterizer {
    fn rasterize(&self, text: &str, style: &TextStyle) -> LedstageResult<Raster> {
        self.calls.set(self.calls.get() + 1);
        let pad = style.stroke_width * 2;
        let size = Size::new(text.chars().count() as u32 * 4 + pad, 6 + pad);
        Ok(Raster::filled(size, style.color))
    }
}

#[test]
fn construction_rasterizes_once() {
    let rasterizer = BlockRasterizer::new();
    let actor = Text::new(
        "label",
        Point::new(0, 0),
        rasterizer.clone(),
        "hi",
        TextStyle::plain("tom-thumb", 6),
    );
    assert_eq!(rasterizer.calls.get(), 1);
    assert_eq!(actor.size(), Size::new(8, 6));
}

#[test]
fn unchanged_text_does_not_rerasterize() {
    let rasterizer = BlockRasterizer::new();
    let mut actor = Text::new(
        "label",
        Point::new(0, 0),
        rasterizer.clone(),
        "hi",
        TextStyle::plain("tom-thumb", 6),
    );

    actor.set_text("hi");
    actor.set_color(Rgba::WHITE);
    assert_eq!(rasterizer.calls.get(), 1);

    actor.set_text("hey");
    assert_eq!(rasterizer.calls.get(), 2);
    actor.set_color(Rgba::opaque(255, 0, 0));
    assert_eq!(rasterizer.calls.get(), 3);
}

#[test]
fn stroke_pads_the_size_and_shifts_the_blit() {
    let rasterizer = BlockRasterizer::new();
    let mut style = TextStyle::plain("tom-thumb", 6);
    style.color = Rgba::opaque(255, 0, 0);
    style.stroke_width = 1;

    let mut actor = Text::new("label", Point::new(3, 3), rasterizer, "a", style);
    assert_eq!(actor.size(), Size::new(6, 8));

    let mut canvas = Canvas::new(Size::new(12, 12));
    actor.render(&mut canvas);
    // The padded raster lands one pixel up and left of the glyph origin.
    assert_eq!(canvas.pixel(2, 2), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(canvas.pixel(1, 1), Some(Rgba::BLACK));
    assert!(!actor.is_dirty());
}

#[test]
fn empty_text_renders_nothing() {
    let rasterizer = BlockRasterizer::new();
    let mut actor = Text::new(
        "label",
        Point::new(0, 0),
        rasterizer.clone(),
        "",
        TextStyle::plain("tom-thumb", 6),
    );
    assert_eq!(rasterizer.calls.get(), 0);
    assert_eq!(actor.size(), Size::default());

    let mut canvas = Canvas::new(Size::new(4, 4));
    actor.render(&mut canvas);
    assert_eq!(canvas.pixel(0, 0), Some(Rgba::BLACK));
}

#[test]
fn setting_text_marks_dirty() {
    let rasterizer = BlockRasterizer::new();
    let mut actor = Text::new(
        "label",
        Point::new(0, 0),
        rasterizer,
        "hi",
        TextStyle::plain("tom-thumb", 6),
    );
    let mut canvas = Canvas::new(Size::new(16, 8));
    actor.render(&mut canvas);
    assert!(!actor.is_dirty());

    actor.set_text("ho");
    assert!(actor.is_dirty());
}
