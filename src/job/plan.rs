use crate::{
    caption::primary::PrimarySegmenter,
    caption::translation::TranslationSegmenter,
    config::ReelConfig,
    config::style::resolve_font_path,
    foundation::error::ReelResult,
    overlay::filtergraph::{FilterGraph, build_filter_graph},
    overlay::program::{OverlayProgram, StaticElements, compile_overlays},
    passage::model::Group,
    timeline::drift::DriftReport,
    timeline::layout::{TimedCue, layout},
};

/// Which caption tracks to emit. Static title lines are kept either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobOptions {
    pub primary: bool,
    pub translation: bool,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            primary: true,
            translation: true,
        }
    }
}

/// Everything needed to render one video, minus the media files.
#[derive(Clone, Debug, serde::Serialize)]
pub struct JobPlan {
    pub group_id: String,
    pub primary: Vec<TimedCue>,
    pub translation: Vec<TimedCue>,
    pub program: OverlayProgram,
    pub drift: DriftReport,
}

impl JobPlan {
    /// Lower the overlay program using the styles, canvas, grade and font of `cfg`.
    pub fn filter_graph(&self, cfg: &ReelConfig) -> FilterGraph {
        let font = resolve_font_path(cfg.font_path.as_deref());
        build_filter_graph(&self.program, &cfg.styles, &cfg.canvas, &cfg.grade, &font)
    }
}

/// Segment every passage of `group` in order, lay both tracks out on the shared clock, measure
/// drift against the group's audio length and compile the overlay program.
#[tracing::instrument(skip_all, fields(group = %group.id, passages = group.passages.len()))]
pub fn plan_job(
    group: &Group,
    statics: &StaticElements,
    cfg: &ReelConfig,
    opts: JobOptions,
) -> ReelResult<JobPlan> {
    cfg.validate()?;
    let primary_seg = PrimarySegmenter::new(cfg.segmentation)?;
    let translation_seg = TranslationSegmenter::new(cfg.translation)?;

    let mut primary_cues = Vec::new();
    let mut translation_cues = Vec::new();
    for passage in &group.passages {
        let p = if opts.primary {
            primary_seg.segment_passage(passage)
        } else {
            Vec::new()
        };
        let t = if opts.translation {
            translation_seg.segment_passage(passage)
        } else {
            Vec::new()
        };
        tracing::debug!(
            passage = passage.number(),
            words = passage.words().len(),
            primary_cues = p.len(),
            translation_cues = t.len(),
            "passage segmented"
        );
        primary_cues.extend(p);
        translation_cues.extend(t);
    }

    let primary = layout(primary_cues);
    let translation = layout(translation_cues);

    let drift = DriftReport::measure(&primary, &translation, group.audio_secs());
    drift.log(cfg.drift_tolerance_secs);

    let program = compile_overlays(statics, &primary, &translation, cfg.wrap)?;
    tracing::info!(ops = program.len(), "overlay program compiled");

    Ok(JobPlan {
        group_id: group.id.clone(),
        primary,
        translation,
        program,
        drift,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/job/plan.rs"]
mod tests;
