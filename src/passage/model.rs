use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::{
    foundation::error::{ReelError, ReelResult},
    passage::reconcile::reconcile_words,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Per-word timing boundary from upstream alignment data, in milliseconds of passage audio.
pub struct TimingBoundary {
    /// Offset where the word starts.
    pub start_ms: i64,
    /// Offset where the word ends.
    pub end_ms: i64,
}

impl TimingBoundary {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }
}

impl<'de> Deserialize<'de> for TimingBoundary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Alignment feeds ship segments as `[word_from, word_to, start_ms, end_ms]`; the start
        // sits at index 2 and the end is always the last element.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr(Vec<i64>),
            Obj { start_ms: i64, end_ms: i64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr(v) => {
                if v.len() < 3 {
                    return Err(serde::de::Error::custom(format!(
                        "timing segment needs at least 3 elements, got {}",
                        v.len()
                    )));
                }
                Ok(Self::new(v[2], v[v.len() - 1]))
            }
            Repr::Obj { start_ms, end_ms } => Ok(Self::new(start_ms, end_ms)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One recited unit (a verse) ready for segmentation.
///
/// Constructed only through [`Passage::new`] / [`PassageDef::into_passage`], which reconcile
/// words against boundaries and reject degenerate durations, so `words().len()` always equals
/// `boundaries().len()`.
pub struct Passage {
    number: u32,
    words: Vec<String>,
    boundaries: Vec<TimingBoundary>,
    translation: String,
    duration_ms: i64,
}

impl Passage {
    pub fn new(
        number: u32,
        words: Vec<String>,
        boundaries: Vec<TimingBoundary>,
        translation: impl Into<String>,
        duration_ms: i64,
    ) -> ReelResult<Self> {
        if duration_ms <= 0 {
            return Err(ReelError::validation(format!(
                "passage {number} duration must be positive, got {duration_ms} ms"
            )));
        }
        for (i, b) in boundaries.iter().enumerate() {
            if b.end_ms < b.start_ms {
                return Err(ReelError::validation(format!(
                    "passage {number} boundary {i} ends ({}) before it starts ({})",
                    b.end_ms, b.start_ms
                )));
            }
        }
        for (i, pair) in boundaries.windows(2).enumerate() {
            if pair[1].start_ms < pair[0].start_ms {
                return Err(ReelError::validation(format!(
                    "passage {number} boundary {} starts ({}) before boundary {i} ({})",
                    i + 1,
                    pair[1].start_ms,
                    pair[0].start_ms
                )));
            }
        }
        if let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) {
            let spoken = last.end_ms - first.start_ms;
            if duration_ms < spoken {
                return Err(ReelError::validation(format!(
                    "passage {number} duration {duration_ms} ms is shorter than its timed words ({spoken} ms)"
                )));
            }
        }

        let words = reconcile_words(number, words, boundaries.len())?;
        Ok(Self {
            number,
            words,
            boundaries,
            translation: translation.into(),
            duration_ms,
        })
    }

    /// Passage ordinal (verse number).
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn boundaries(&self) -> &[TimingBoundary] {
        &self.boundaries
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Whitespace-separated translation tokens.
    pub fn translation_words(&self) -> Vec<&str> {
        self.translation.split_whitespace().collect()
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// JSON-facing passage record; every field is optional so absence can be reported precisely.
pub struct PassageDef {
    pub ayah_number: Option<u32>,
    pub arabic_words: Option<Vec<String>>,
    pub segments: Option<Vec<TimingBoundary>>,
    pub translation: Option<String>,
    pub duration_ms: Option<i64>,
    /// Source clip for the audio merger; unused by captioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl PassageDef {
    /// Validate required fields and build a reconciled [`Passage`].
    pub fn into_passage(self) -> ReelResult<Passage> {
        let number = self
            .ayah_number
            .ok_or_else(|| ReelError::missing_field(None, "ayah_number"))?;
        let words = self
            .arabic_words
            .ok_or_else(|| ReelError::missing_field(Some(number), "arabic_words"))?;
        let boundaries = self
            .segments
            .ok_or_else(|| ReelError::missing_field(Some(number), "segments"))?;
        let translation = self
            .translation
            .ok_or_else(|| ReelError::missing_field(Some(number), "translation"))?;
        let duration_ms = self
            .duration_ms
            .ok_or_else(|| ReelError::missing_field(Some(number), "duration_ms"))?;

        Passage::new(number, words, boundaries, translation, duration_ms)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// JSON-facing group (one video job): a contiguous run of passages from one chapter.
pub struct GroupDef {
    pub surah: Option<u32>,
    pub ayah_start: Option<u32>,
    pub ayah_end: Option<u32>,
    pub duration_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reciter_name: Option<String>,
    pub ayahs: Option<Vec<PassageDef>>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Validated video job input.
pub struct Group {
    pub id: String,
    pub surah: u32,
    pub ayah_start: u32,
    pub ayah_end: u32,
    pub reciter_name: String,
    /// Declared merged-audio length, if the source carried one.
    pub duration_ms: Option<i64>,
    pub passages: Vec<Passage>,
}

impl Group {
    /// Audio length the caption tracks are measured against.
    ///
    /// Uses the declared group duration when present, otherwise the sum of passage durations
    /// (the merged audio is a plain concatenation of passage clips).
    pub fn audio_secs(&self) -> f64 {
        let ms = self
            .duration_ms
            .unwrap_or_else(|| self.passages.iter().map(Passage::duration_ms).sum());
        ms as f64 / 1000.0
    }

    /// True when the group covers a single passage.
    pub fn is_single(&self) -> bool {
        self.ayah_start == self.ayah_end
    }
}

impl GroupDef {
    /// Validate required fields and all passages. `fallback_reciter` is the file-level
    /// reciter name used when the group does not carry its own.
    pub fn into_group(self, id: &str, fallback_reciter: Option<&str>) -> ReelResult<Group> {
        let surah = self
            .surah
            .ok_or_else(|| ReelError::missing_field(None, "surah"))?;
        let ayah_start = self
            .ayah_start
            .ok_or_else(|| ReelError::missing_field(None, "ayah_start"))?;
        let ayah_end = self
            .ayah_end
            .ok_or_else(|| ReelError::missing_field(None, "ayah_end"))?;
        if ayah_end < ayah_start {
            return Err(ReelError::validation(format!(
                "group '{id}' ayah_end {ayah_end} precedes ayah_start {ayah_start}"
            )));
        }
        if let Some(d) = self.duration_ms
            && d <= 0
        {
            return Err(ReelError::validation(format!(
                "group '{id}' duration must be positive, got {d} ms"
            )));
        }
        let reciter_name = self
            .reciter_name
            .or_else(|| fallback_reciter.map(str::to_owned))
            .ok_or_else(|| ReelError::missing_field(None, "reciter_name"))?;
        let passages = self
            .ayahs
            .ok_or_else(|| ReelError::missing_field(None, "ayahs"))?
            .into_iter()
            .map(PassageDef::into_passage)
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(Group {
            id: id.to_owned(),
            surah,
            ayah_start,
            ayah_end,
            reciter_name,
            duration_ms: self.duration_ms,
            passages,
        })
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// A per-reciter file of groups keyed by group id.
pub struct GroupFile {
    #[serde(default)]
    pub reciter_name: Option<String>,
    #[serde(default)]
    pub groups: BTreeMap<String, GroupDef>,
}

impl GroupFile {
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse group file JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open group file '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Group ids in file order (sorted).
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Look up and validate one group.
    pub fn group(&self, id: &str) -> ReelResult<Group> {
        let def = self
            .groups
            .get(id)
            .ok_or_else(|| ReelError::validation(format!("group '{id}' not found")))?;
        def.clone().into_group(id, self.reciter_name.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passage/model.rs"]
mod tests;
