//! Passage input model, JSON boundary validation, and word/boundary reconciliation.

/// Passage, group and group-file types.
pub mod model;
/// Word/timing-boundary count repair.
pub mod reconcile;
