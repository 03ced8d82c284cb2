//! versereel turns word-aligned recitation data into captioned vertical videos.
//!
//! A job runs in three stages:
//!
//! - Load a [`Group`] of passages and reconcile each passage's words with its timing boundaries
//! - Segment both caption tracks into [`Cue`]s, lay them out on one clock and compile an
//!   [`OverlayProgram`] ([`plan_job`])
//! - Lower the program to an ffmpeg [`FilterGraph`] and encode ([`render_video`])
#![forbid(unsafe_code)]

/// Caption segmentation, wrapping and numerals.
pub mod caption;
/// Serde-loadable job configuration.
pub mod config;
/// ffmpeg invocation.
pub mod encode;
/// Shared primitives and the error type.
pub mod foundation;
/// Job orchestration.
pub mod job;
/// Overlay program IR and filter graph lowering.
pub mod overlay;
/// Passage and group input model.
pub mod passage;
/// Timeline layout and drift measurement.
pub mod timeline;
/// Static title lines and name catalogs.
pub mod titles;

pub use crate::foundation::core::TimeWindow;
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::caption::cue::Cue;
pub use crate::caption::primary::{PrimarySegmenter, SegmentThresholds};
pub use crate::caption::translation::{TranslationGrouping, TranslationSegmenter};
pub use crate::caption::wrap::{WrapLimits, wrap_text};
pub use crate::config::ReelConfig;
pub use crate::encode::ffmpeg::{EncodeSettings, RenderInputs, merge_audio, render_video};
pub use crate::job::plan::{JobOptions, JobPlan, plan_job};
pub use crate::overlay::filtergraph::{FilterGraph, build_filter_graph};
pub use crate::overlay::program::{
    OverlayOperation, OverlayProgram, OverlaySlot, StaticElements, compile_overlays,
};
pub use crate::passage::model::{Group, GroupFile, Passage, TimingBoundary};
pub use crate::timeline::drift::DriftReport;
pub use crate::timeline::layout::{TimedCue, layout};
pub use crate::titles::catalog::NameCatalog;
pub use crate::titles::header::static_elements;
