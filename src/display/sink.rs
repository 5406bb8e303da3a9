use crate::assets::raster::Raster;
use crate::foundation::core::{Point, Size};

/// An RGB frame staged for hand-off to a display.
///
/// Display hardware has no alpha channel, so staging drops alpha: canvas
/// pixels keep their RGB values as-is. Buffers start out black.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    size: Size,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a black buffer of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            data: vec![0; size.w as usize * size.h as usize * 3],
        }
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Row-major RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one RGB pixel; `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.size.w as i32 || y >= self.size.h as i32 {
            return None;
        }
        let at = (y as usize * self.size.w as usize + x as usize) * 3;
        Some((self.data[at], self.data[at + 1], self.data[at + 2]))
    }

    /// Copy `raster` into the buffer with its top-left corner at `offset`,
    /// clipped to the buffer bounds.
    pub fn set_image(&mut self, raster: &Raster, offset: Point) {
        let src = raster.size();
        for sy in 0..src.h as i32 {
            let dy = offset.y + sy;
            if dy < 0 || dy >= self.size.h as i32 {
                continue;
            }
            for sx in 0..src.w as i32 {
                let dx = offset.x + sx;
                if dx < 0 || dx >= self.size.w as i32 {
                    continue;
                }
                // Clipped reads always succeed.
                let Some(px) = raster.pixel(sx, sy) else {
                    continue;
                };
                let at = (dy as usize * self.size.w as usize + dx as usize) * 3;
                self.data[at] = px.r;
                self.data[at + 1] = px.g;
                self.data[at + 2] = px.b;
            }
        }
    }
}

/// Double-buffered hand-off to a display.
///
/// The caller stages pixels into a buffer obtained from [`create_buffer`]
/// (or a previous swap), then trades it for a fresh buffer with
/// [`swap_on_vsync`]; the sink presents the traded-in frame at the next
/// vertical sync. Swapping has no failure mode.
///
/// [`create_buffer`]: FrameSink::create_buffer
/// [`swap_on_vsync`]: FrameSink::swap_on_vsync
pub trait FrameSink {
    /// Panel dimensions; buffers are always exactly this size.
    fn size(&self) -> Size;

    /// A fresh black buffer for staging the next frame.
    fn create_buffer(&mut self) -> FrameBuffer {
        FrameBuffer::new(self.size())
    }

    /// Present `frame` at the next vertical sync and return a buffer for the
    /// frame after it.
    fn swap_on_vsync(&mut self, frame: FrameBuffer) -> FrameBuffer;
}

/// Shared handles forward to the inner sink, letting a caller keep a handle
/// to a sink after handing ownership of the other handle to the stage.
impl<S: FrameSink> FrameSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn size(&self) -> Size {
        self.borrow().size()
    }

    fn create_buffer(&mut self) -> FrameBuffer {
        self.borrow_mut().create_buffer()
    }

    fn swap_on_vsync(&mut self, frame: FrameBuffer) -> FrameBuffer {
        self.borrow_mut().swap_on_vsync(frame)
    }
}

/// A sink that records every presented frame in memory.
///
/// Stands in for real display hardware during development and in tests,
/// where assertions read back the recorded frames.
#[derive(Debug, Default)]
pub struct VirtualSink {
    size: Size,
    frames: Vec<FrameBuffer>,
}

impl VirtualSink {
    /// Create a virtual panel of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            frames: Vec::new(),
        }
    }

    /// Every frame presented so far, in order.
    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    /// The most recently presented frame, if any.
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }

    /// Number of frames presented.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSink for VirtualSink {
    fn size(&self) -> Size {
        self.size
    }

    fn swap_on_vsync(&mut self, frame: FrameBuffer) -> FrameBuffer {
        self.frames.push(frame);
        FrameBuffer::new(self.size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/sink.rs"]
mod tests;
