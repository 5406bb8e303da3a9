//! Decoded pixel assets and the external rasterization seams.

pub mod raster;
pub mod sprite;
pub mod text;
