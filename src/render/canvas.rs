use crate::assets::raster::Raster;
use crate::foundation::core::{Point, Rect, Rgba, Size};

/// An in-memory RGBA pixel buffer that actors render themselves onto.
///
/// Two kinds of operations with deliberately different semantics:
/// - draw primitives (`set_pixel`, `draw_line`, `fill_rect`, `draw_rect`)
///   overwrite pixel values, alpha included;
/// - `composite_raster` alpha-blends a source raster over the buffer.
///
/// Every operation clips to the canvas bounds and degrades to a no-op on
/// fully out-of-bounds input; there is no failure mode.
#[derive(Clone, Debug)]
pub struct Canvas {
    raster: Raster,
    background: Rgba,
}

impl Canvas {
    /// Create a canvas cleared to an opaque black background.
    pub fn new(size: Size) -> Self {
        Self::with_background(size, Rgba::BLACK)
    }

    /// Create a canvas cleared to a fully transparent background.
    ///
    /// Used for scratch surfaces that are later composited onto the display
    /// canvas.
    pub fn transparent(size: Size) -> Self {
        Self::with_background(size, Rgba::TRANSPARENT)
    }

    /// Create a canvas with an explicit background color.
    pub fn with_background(size: Size, background: Rgba) -> Self {
        Self {
            raster: Raster::filled(size, background),
            background,
        }
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Size {
        self.raster.size()
    }

    /// The configured background color.
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Borrow the backing raster, e.g. to composite this canvas onto another.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Read one pixel; `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.raster.pixel(x, y)
    }

    /// Reset every pixel to the background color.
    pub fn blank(&mut self) {
        self.raster = Raster::filled(self.size(), self.background);
    }

    /// Overwrite one pixel, clipped to bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.raster.set_pixel(x, y, color);
    }

    /// Alpha-blend `src` over the canvas with its top-left corner at `dest`.
    ///
    /// When `src_rect` is given, only that region of the source raster is
    /// composited; the rect is clipped to the source bounds first.
    pub fn composite_raster(&mut self, src: &Raster, dest: Point, src_rect: Option<Rect>) {
        let full = src.bounds();
        let rect = src_rect.unwrap_or(full);

        // Clip the source rect to the source raster.
        let sx0 = rect.pos.x.max(0);
        let sy0 = rect.pos.y.max(0);
        let sx1 = (rect.pos.x + rect.size.w as i32).min(full.size.w as i32);
        let sy1 = (rect.pos.y + rect.size.h as i32).min(full.size.h as i32);
        if sx0 >= sx1 || sy0 >= sy1 {
            return;
        }

        for sy in sy0..sy1 {
            let dy = dest.y + (sy - sy0);
            for sx in sx0..sx1 {
                let dx = dest.x + (sx - sx0);
                let Some(under) = self.raster.pixel(dx, dy) else {
                    continue;
                };
                // Clipped source reads always succeed.
                let Some(over) = src.pixel(sx, sy) else {
                    continue;
                };
                self.raster.set_pixel(dx, dy, blend_over(over, under));
            }
        }
    }

    /// Draw a 1-pixel-wide line between two points (inclusive endpoints).
    pub fn draw_line(&mut self, start: Point, end: Point, color: Rgba) {
        // Bresenham over integer coordinates.
        let (mut x, mut y) = (start.x, start.y);
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let sy = if start.y < end.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
            if x == end.x && y == end.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Overwrite every pixel in `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let x0 = rect.pos.x.max(0);
        let y0 = rect.pos.y.max(0);
        let x1 = (rect.pos.x + rect.size.w as i32).min(self.size().w as i32);
        let y1 = (rect.pos.y + rect.size.h as i32).min(self.size().h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.raster.set_pixel(x, y, color);
            }
        }
    }

    /// Draw a rectangle with an optional fill and an outline of the given
    /// width drawn inside the rectangle bounds.
    pub fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<Rgba>,
        outline: Option<Rgba>,
        outline_width: u32,
    ) {
        if let Some(color) = fill {
            self.fill_rect(rect, color);
        }
        let Some(color) = outline else {
            return;
        };
        let rings = outline_width.min(rect.size.w.div_ceil(2)).min(rect.size.h.div_ceil(2));
        for i in 0..rings as i32 {
            let w = rect.size.w as i32 - 2 * i;
            let h = rect.size.h as i32 - 2 * i;
            if w <= 0 || h <= 0 {
                break;
            }
            let x = rect.pos.x + i;
            let y = rect.pos.y + i;
            self.fill_rect(Rect::new(x, y, w as u32, 1), color);
            self.fill_rect(Rect::new(x, y + h - 1, w as u32, 1), color);
            self.fill_rect(Rect::new(x, y, 1, h as u32), color);
            self.fill_rect(Rect::new(x + w - 1, y, 1, h as u32), color);
        }
    }
}

/// Straight-alpha "over" blend with integer rounding.
fn blend_over(over: Rgba, under: Rgba) -> Rgba {
    if over.a == 255 {
        return over;
    }
    if over.a == 0 {
        return under;
    }

    let sa = u32::from(over.a);
    let da = u32::from(under.a);
    // out_a scaled by 255: sa*255 + da*(255-sa)
    let out_a255 = sa * 255 + da * (255 - sa);
    if out_a255 == 0 {
        return Rgba::TRANSPARENT;
    }

    let ch = |s: u8, d: u8| -> u8 {
        let s = u32::from(s);
        let d = u32::from(d);
        let num = s * sa * 255 + d * da * (255 - sa);
        ((num + out_a255 / 2) / out_a255) as u8
    };

    Rgba::new(
        ch(over.r, under.r),
        ch(over.g, under.g),
        ch(over.b, under.b),
        ((out_a255 + 127) / 255) as u8,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
