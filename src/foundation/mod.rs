//! Shared primitives: error taxonomy and playback-time types.

pub mod core;
pub mod error;
