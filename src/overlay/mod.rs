//! Overlay compilation: timed cues and title lines become drawtext instructions.

/// drawtext text escaping.
pub mod escape;
/// ffmpeg filter graph lowering.
pub mod filtergraph;
/// Overlay program IR.
pub mod program;
