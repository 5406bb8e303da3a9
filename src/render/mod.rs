//! The pixel canvas actors render onto.

pub mod canvas;
