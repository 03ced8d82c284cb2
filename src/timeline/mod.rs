//! Cue timeline layout and drift measurement.

/// Caption-vs-audio drift report.
pub mod drift;
/// Cumulative cue anchoring.
pub mod layout;
