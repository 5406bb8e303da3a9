//! A scene-compositing and animation engine for low-resolution LED matrix
//! displays.
//!
//! The engine composes a scene from [`actor`]s (images, sprites, text,
//! shapes, composites) drawn onto an RGBA [`render::canvas::Canvas`],
//! mutates them over wall-clock time with [`animation`]s, and hands finished
//! frames to a double-buffered [`display::sink::FrameSink`]. The [`stage`]
//! runs the per-tick update/render/swap cycle and skips pixel work entirely
//! on ticks where nothing changed; the [`app`] module paces that cycle at a
//! maximum frame rate.
//!
//! Everything is single-threaded and cooperative: one tick at a time, with
//! scene mutation allowed only between ticks.

#![forbid(unsafe_code)]

pub mod actor;
pub mod animation;
pub mod app;
pub mod assets;
pub mod display;
pub mod foundation;
pub mod render;
pub mod stage;

pub use actor::{Actor, ActorRef, shared};
pub use animation::Animation;
pub use animation::ease::Easing;
pub use app::{App, AppRunner, CancelToken, Clock};
pub use display::sink::{FrameBuffer, FrameSink, VirtualSink};
pub use foundation::core::{FrameRate, Point, Rect, Rgba, Size};
pub use foundation::error::{LedstageError, LedstageResult};
pub use render::canvas::Canvas;
pub use stage::Stage;
