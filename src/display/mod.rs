//! Frame hand-off to display hardware.

pub mod sink;
