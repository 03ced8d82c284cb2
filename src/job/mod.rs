//! Per-job orchestration from a validated group to an overlay program.

/// Job planning.
pub mod plan;
