use crate::assets::raster::Raster;
use crate::foundation::core::Rgba;
use crate::foundation::error::LedstageResult;

/// Visual parameters for rasterized text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font family or font file identifier, interpreted by the rasterizer.
    pub font: String,
    /// Nominal pixel size of the font.
    pub font_px: u32,
    /// Fill color.
    pub color: Rgba,
    /// Stroke (outline) color.
    pub stroke_color: Rgba,
    /// Stroke width in pixels; 0 disables the stroke.
    pub stroke_width: u32,
}

impl TextStyle {
    /// White text without a stroke.
    pub fn plain(font: impl Into<String>, font_px: u32) -> Self {
        Self {
            font: font.into(),
            font_px,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_width: 0,
        }
    }
}

/// External glyph rasterization service.
///
/// Implementations measure the text, pad the bounding box by the stroke width
/// on every side, and return the finished raster with the glyphs drawn at
/// `(stroke_width, stroke_width)`. The engine treats the result as opaque
/// pixels; it never inspects glyph geometry.
pub trait TextRasterizer {
    /// Rasterize `text` with `style` into a measured RGBA raster.
    fn rasterize(&self, text: &str, style: &TextStyle) -> LedstageResult<Raster>;
}
