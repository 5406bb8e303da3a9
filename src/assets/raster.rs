use std::io::Cursor;
use std::time::Duration;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use crate::foundation::core::{Point, Rect, Rgba, Size};
use crate::foundation::error::{LedstageError, LedstageResult};

/// Display time used for animation frames that carry no delay of their own.
const DEFAULT_FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 6);

/// A decoded straight-alpha RGBA image, tightly packed row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Raster {
    size: Size,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster filled with one color.
    pub fn filled(size: Size, color: Rgba) -> Self {
        let mut data = Vec::with_capacity(size.w as usize * size.h as usize * 4);
        for _ in 0..(size.w as usize * size.h as usize) {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { size, data }
    }

    /// Create a raster from raw RGBA bytes; the length must be `w * h * 4`.
    pub fn from_rgba_bytes(size: Size, data: Vec<u8>) -> LedstageResult<Self> {
        if data.len() != size.w as usize * size.h as usize * 4 {
            return Err(LedstageError::validation(format!(
                "raster data length {} does not match {}x{}",
                data.len(),
                size.w,
                size.h
            )));
        }
        Ok(Self { size, data })
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel; `None` outside the raster.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x as u32 >= self.size.w || y as u32 >= self.size.h {
            return None;
        }
        let i = (y as usize * self.size.w as usize + x as usize) * 4;
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Overwrite one pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.size.w || y as u32 >= self.size.h {
            return;
        }
        let i = (y as usize * self.size.w as usize + x as usize) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// The rectangle covering the whole raster at the origin.
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: Point::default(),
            size: self.size,
        }
    }
}

/// Decode an encoded image (PNG, GIF first frame, JPEG, ...) into a raster.
pub fn decode_image(bytes: &[u8]) -> LedstageResult<Raster> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| LedstageError::asset(format!("image decode failed: {e}")))?
        .to_rgba8();
    let size = Size::new(img.width(), img.height());
    Raster::from_rgba_bytes(size, img.into_raw())
}

/// Decode an animated GIF into ordered frames with per-frame display times.
///
/// Frames without an encoded delay get [`DEFAULT_FRAME_DURATION`].
pub fn decode_animation(bytes: &[u8]) -> LedstageResult<Vec<(Raster, Duration)>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| LedstageError::asset(format!("gif decode failed: {e}")))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| LedstageError::asset(format!("gif frame decode failed: {e}")))?;

    let mut out = Vec::with_capacity(frames.len());
    for frame in frames {
        let delay = Duration::from(frame.delay());
        let delay = if delay.is_zero() {
            DEFAULT_FRAME_DURATION
        } else {
            delay
        };
        let buf = frame.into_buffer();
        let size = Size::new(buf.width(), buf.height());
        out.push((Raster::from_rgba_bytes(size, buf.into_raw())?, delay));
    }
    Ok(out)
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<std::path::Path>) -> LedstageResult<Raster> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| LedstageError::asset(format!("read {}: {e}", path.as_ref().display())))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
