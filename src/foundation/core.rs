use crate::foundation::error::{LedstageError, LedstageResult};

/// Integer pixel position on the display, `(0, 0)` at the top left.
///
/// Positions may go negative while an actor slides off the edge; drawing is
/// clipped at render time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate, growing rightward.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Pixel dimensions of a raster, actor, or display.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Size {
    /// Create a size.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// An axis-aligned pixel rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Point,
    /// Extent in pixels.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its corner coordinates and extent.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            pos: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Inclusive right column (`x + w - 1`); equals `x` for empty widths.
    pub fn right(self) -> i32 {
        self.pos.x + self.size.w.saturating_sub(1) as i32
    }

    /// Inclusive bottom row (`y + h - 1`); equals `y` for empty heights.
    pub fn bottom(self) -> i32 {
        self.pos.y + self.size.h.saturating_sub(1) as i32
    }
}

/// Straight-alpha RGBA color, 8 bits per channel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 0 is fully transparent.
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque black, the blank-display color.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// Frames-per-second cap for the cooperative render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRate(u32);

impl FrameRate {
    /// Create a validated, non-zero frame-rate cap.
    pub fn new(fps: u32) -> LedstageResult<Self> {
        if fps == 0 {
            return Err(LedstageError::validation("FrameRate must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Frames per second as an integer.
    pub fn fps(self) -> u32 {
        self.0
    }

    /// Minimum duration of one tick in seconds.
    pub fn min_tick_secs(self) -> f64 {
        1.0 / f64::from(self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
