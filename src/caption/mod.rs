//! Caption segmentation: primary-script cues, translation cues, line wrapping.

/// Caption cue type.
pub mod cue;
/// Native numeral rendering for passage markers.
pub mod numerals;
/// Timing-driven primary caption segmentation.
pub mod primary;
/// Uniform-duration translation caption segmentation.
pub mod translation;
/// Greedy character-budget line wrapping.
pub mod wrap;
