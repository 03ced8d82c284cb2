//! Final encoding through the system `ffmpeg`.
//!
//! The overlay program is handed to `ffmpeg` as a filter graph; no frames are rendered here.

/// Render/merge invocations and their argument builders.
pub mod ffmpeg;
