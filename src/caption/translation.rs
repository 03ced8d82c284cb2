use crate::{
    caption::cue::Cue,
    foundation::error::{ReelError, ReelResult},
    passage::model::Passage,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Fixed-size grouping for the translation track.
pub struct TranslationGrouping {
    /// Words per cue; the final cue of a passage may hold fewer.
    pub group_size: usize,
    /// Padding added to every group's share of the passage duration.
    pub pad_secs: f64,
}

impl Default for TranslationGrouping {
    fn default() -> Self {
        Self {
            group_size: 10,
            pad_secs: 0.25,
        }
    }
}

impl TranslationGrouping {
    pub fn validate(&self) -> ReelResult<()> {
        if self.group_size == 0 {
            return Err(ReelError::validation(
                "translation group size must be non-zero",
            ));
        }
        if !(self.pad_secs >= 0.0) {
            return Err(ReelError::validation(
                "translation padding must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Splits translation text into equal-duration word groups.
///
/// Translation text carries no alignment data, so the passage duration is split evenly across
/// groups regardless of how many words each group actually holds.
#[derive(Clone, Copy, Debug)]
pub struct TranslationSegmenter {
    grouping: TranslationGrouping,
}

impl TranslationSegmenter {
    pub fn new(grouping: TranslationGrouping) -> ReelResult<Self> {
        grouping.validate()?;
        Ok(Self { grouping })
    }

    pub fn grouping(&self) -> TranslationGrouping {
        self.grouping
    }

    pub fn segment_passage(&self, passage: &Passage) -> Vec<Cue> {
        self.segment(&passage.translation_words(), passage.duration_secs())
    }

    pub fn segment<S: AsRef<str>>(&self, words: &[S], total_secs: f64) -> Vec<Cue> {
        if words.is_empty() {
            return Vec::new();
        }
        let size = self.grouping.group_size;
        let groups = words.len().div_ceil(size);
        let secs = total_secs / groups as f64 + self.grouping.pad_secs;

        words
            .chunks(size)
            .map(|chunk| {
                let text = chunk
                    .iter()
                    .map(|w| w.as_ref())
                    .collect::<Vec<&str>>()
                    .join(" ");
                Cue::new(text, secs)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/translation.rs"]
mod tests;
