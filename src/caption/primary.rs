use crate::{
    caption::cue::Cue,
    caption::numerals::native_numerals,
    foundation::error::{ReelError, ReelResult},
    passage::model::{Passage, TimingBoundary},
};

/// Opening ornament placed before a passage's final cue.
pub const ORNAMENT_OPEN: char = '\u{FD3E}';
/// Closing ornament; the passage marker follows it directly.
pub const ORNAMENT_CLOSE: char = '\u{FD3F}';

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Word-count thresholds and padding for primary caption segmentation.
pub struct SegmentThresholds {
    /// Passages shorter than this emit a single closing cue; longer ones peel off `low` words.
    pub low: usize,
    /// Passages in `[low, high)` split once at the midpoint.
    pub high: usize,
    /// Padding added to closing and midpoint-split cues.
    pub tail_pad_secs: f64,
    /// Padding added to cues peeled off the front of long passages.
    pub lead_pad_secs: f64,
}

impl Default for SegmentThresholds {
    fn default() -> Self {
        Self {
            low: 5,
            high: 8,
            tail_pad_secs: 1.0,
            lead_pad_secs: 1.5,
        }
    }
}

impl SegmentThresholds {
    pub fn validate(&self) -> ReelResult<()> {
        // The midpoint split reads `boundaries[m + 1]`, which needs at least three words.
        if self.low < 3 {
            return Err(ReelError::validation(format!(
                "segmentation low threshold must be >= 3, got {}",
                self.low
            )));
        }
        if self.high <= self.low {
            return Err(ReelError::validation(format!(
                "segmentation high threshold ({}) must exceed low ({})",
                self.high, self.low
            )));
        }
        // Zero-length words still need cues longer than zero.
        for (name, pad) in [
            ("tail_pad_secs", self.tail_pad_secs),
            ("lead_pad_secs", self.lead_pad_secs),
        ] {
            if !(pad.is_finite() && pad > 0.0) {
                return Err(ReelError::validation(format!(
                    "segmentation {name} must be positive, got {pad}"
                )));
            }
        }
        Ok(())
    }
}

/// Splits a passage's words into display-sized cues using per-word timing boundaries.
#[derive(Clone, Copy, Debug)]
pub struct PrimarySegmenter {
    thresholds: SegmentThresholds,
}

impl PrimarySegmenter {
    pub fn new(thresholds: SegmentThresholds) -> ReelResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> SegmentThresholds {
        self.thresholds
    }

    /// Segment a reconciled passage, marking its final cue with the passage ordinal.
    pub fn segment_passage(&self, passage: &Passage) -> Vec<Cue> {
        let marker = native_numerals(passage.number());
        let mut out = Vec::new();
        self.segment_into(passage.words(), passage.boundaries(), &marker, &mut out);
        out
    }

    /// Segment raw word/boundary slices. Both slices must have equal length.
    pub fn segment(
        &self,
        passage: u32,
        words: &[String],
        boundaries: &[TimingBoundary],
        marker: &str,
    ) -> ReelResult<Vec<Cue>> {
        if words.len() != boundaries.len() {
            return Err(ReelError::alignment(
                passage,
                format!(
                    "{} words vs {} timing boundaries",
                    words.len(),
                    boundaries.len()
                ),
            ));
        }
        let mut out = Vec::new();
        self.segment_into(words, boundaries, marker, &mut out);
        Ok(out)
    }

    fn segment_into(
        &self,
        mut words: &[String],
        mut boundaries: &[TimingBoundary],
        marker: &str,
        out: &mut Vec<Cue>,
    ) {
        let SegmentThresholds {
            low,
            high,
            tail_pad_secs,
            lead_pad_secs,
        } = self.thresholds;

        // Each pass either finishes the passage or consumes `low` words.
        loop {
            let n = words.len();
            if n == 0 {
                return;
            }
            let last = n - 1;

            if n < low {
                let secs = span_secs(boundaries[0], boundaries[last]) + tail_pad_secs;
                out.push(Cue::new(ornament(words, marker), secs));
                return;
            }

            if n < high {
                let m = n / 2;
                let first = span_secs(boundaries[0], boundaries[m - 1]) + tail_pad_secs;
                let second = span_secs(boundaries[m + 1], boundaries[last]) + tail_pad_secs;
                out.push(Cue::new(words[..m].join(" "), first));
                out.push(Cue::new(ornament(&words[m..], marker), second));
                return;
            }

            let secs = span_secs(boundaries[0], boundaries[low - 1]) + lead_pad_secs;
            out.push(Cue::new(words[..low].join(" "), secs));
            words = &words[low..];
            boundaries = &boundaries[low..];
        }
    }
}

fn span_secs(from: TimingBoundary, to: TimingBoundary) -> f64 {
    (to.end_ms - from.start_ms) as f64 / 1000.0
}

fn ornament(words: &[String], marker: &str) -> String {
    format!(
        "{ORNAMENT_OPEN}{} {ORNAMENT_CLOSE}{marker}",
        words.join(" ")
    )
}

#[cfg(test)]
#[path = "../../tests/unit/caption/primary.rs"]
mod tests;
