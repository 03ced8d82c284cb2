use crate::{
    caption::wrap::{WrapLimits, wrap_text},
    foundation::core::TimeWindow,
    foundation::error::ReelResult,
    overlay::escape::escape_drawtext,
    timeline::layout::TimedCue,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Fixed screen position an overlay is drawn at; resolved to a style by the caller.
pub enum OverlaySlot {
    PrimaryTitle,
    PrimarySubtitle,
    PrimaryCue,
    TranslationTitle,
    TranslationSubtitle,
    TranslationCue,
}

impl OverlaySlot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryTitle => "primary_title",
            Self::PrimarySubtitle => "primary_subtitle",
            Self::PrimaryCue => "primary_cue",
            Self::TranslationTitle => "translation_title",
            Self::TranslationSubtitle => "translation_subtitle",
            Self::TranslationCue => "translation_cue",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One instruction of the compiled overlay program. Text is already wrapped and escaped.
pub enum OverlayOperation {
    /// Visible for the whole video.
    Static { slot: OverlaySlot, text: String },
    /// Visible only while playback time lies in `window`.
    Gated {
        slot: OverlaySlot,
        text: String,
        window: TimeWindow,
    },
}

impl OverlayOperation {
    pub fn slot(&self) -> OverlaySlot {
        match self {
            Self::Static { slot, .. } | Self::Gated { slot, .. } => *slot,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Static { text, .. } | Self::Gated { text, .. } => text,
        }
    }

    pub fn window(&self) -> Option<TimeWindow> {
        match self {
            Self::Static { .. } => None,
            Self::Gated { window, .. } => Some(*window),
        }
    }

    pub fn is_visible_at(&self, t: f64) -> bool {
        self.window().is_none_or(|w| w.contains(t))
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The four always-visible title lines, as plain (unescaped) text.
pub struct StaticElements {
    pub primary_title: String,
    pub primary_subtitle: String,
    pub translation_title: String,
    pub translation_subtitle: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Ordered overlay program handed to the render invocation.
pub struct OverlayProgram {
    ops: Vec<OverlayOperation>,
}

impl OverlayProgram {
    pub fn ops(&self) -> &[OverlayOperation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OverlayOperation> {
        self.ops.iter()
    }

    /// Operations drawn at playback time `t`, in program order.
    pub fn visible_at(&self, t: f64) -> Vec<&OverlayOperation> {
        self.ops.iter().filter(|op| op.is_visible_at(t)).collect()
    }
}

impl<'a> IntoIterator for &'a OverlayProgram {
    type Item = &'a OverlayOperation;
    type IntoIter = std::slice::Iter<'a, OverlayOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Compile static titles and both timed tracks into one ordered overlay program.
///
/// Order: primary title, primary subtitle, primary cues, translation title, translation
/// subtitle, translation cues. Cue text is wrapped with its track's limit and then escaped;
/// static text is escaped only.
pub fn compile_overlays(
    statics: &StaticElements,
    primary: &[TimedCue],
    translation: &[TimedCue],
    wrap: WrapLimits,
) -> ReelResult<OverlayProgram> {
    wrap.validate()?;

    let mut ops = Vec::with_capacity(primary.len() + translation.len() + 4);
    push_static(&mut ops, OverlaySlot::PrimaryTitle, &statics.primary_title);
    push_static(&mut ops, OverlaySlot::PrimarySubtitle, &statics.primary_subtitle);
    push_gated(&mut ops, OverlaySlot::PrimaryCue, primary, wrap.primary);
    push_static(&mut ops, OverlaySlot::TranslationTitle, &statics.translation_title);
    push_static(
        &mut ops,
        OverlaySlot::TranslationSubtitle,
        &statics.translation_subtitle,
    );
    push_gated(
        &mut ops,
        OverlaySlot::TranslationCue,
        translation,
        wrap.translation,
    );

    Ok(OverlayProgram { ops })
}

fn push_static(ops: &mut Vec<OverlayOperation>, slot: OverlaySlot, text: &str) {
    ops.push(OverlayOperation::Static {
        slot,
        text: escape_drawtext(text),
    });
}

fn push_gated(
    ops: &mut Vec<OverlayOperation>,
    slot: OverlaySlot,
    track: &[TimedCue],
    max_chars: usize,
) {
    ops.extend(track.iter().map(|c| OverlayOperation::Gated {
        slot,
        text: escape_drawtext(&wrap_text(c.text(), max_chars)),
        window: c.window(),
    }));
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/program.rs"]
mod tests;
