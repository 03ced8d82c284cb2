use crate::timeline::layout::{TimedCue, track_end};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// How far each caption track's accumulated timeline ends from the audio, and from each other.
///
/// Both tracks are built purely by summing cue durations, so neither is guaranteed to line up
/// with the real audio length. Positive drift means the track outlasts the audio.
pub struct DriftReport {
    pub audio_secs: f64,
    pub primary_end_secs: Option<f64>,
    pub translation_end_secs: Option<f64>,
}

impl DriftReport {
    pub fn measure(primary: &[TimedCue], translation: &[TimedCue], audio_secs: f64) -> Self {
        Self {
            audio_secs,
            primary_end_secs: track_end(primary),
            translation_end_secs: track_end(translation),
        }
    }

    pub fn primary_drift(&self) -> Option<f64> {
        self.primary_end_secs.map(|e| e - self.audio_secs)
    }

    pub fn translation_drift(&self) -> Option<f64> {
        self.translation_end_secs.map(|e| e - self.audio_secs)
    }

    /// Primary end minus translation end, when both tracks are present.
    pub fn cross_track_drift(&self) -> Option<f64> {
        Some(self.primary_end_secs? - self.translation_end_secs?)
    }

    /// Largest absolute drift across all measured pairs.
    pub fn max_abs_drift(&self) -> f64 {
        [
            self.primary_drift(),
            self.translation_drift(),
            self.cross_track_drift(),
        ]
        .into_iter()
        .flatten()
        .map(f64::abs)
        .fold(0.0, f64::max)
    }

    pub fn exceeds(&self, tolerance_secs: f64) -> bool {
        self.max_abs_drift() > tolerance_secs
    }

    /// Emit the measurement; escalates to a warning past `tolerance_secs`.
    pub fn log(&self, tolerance_secs: f64) {
        if self.exceeds(tolerance_secs) {
            tracing::warn!(
                audio_secs = self.audio_secs,
                primary_drift = ?self.primary_drift(),
                translation_drift = ?self.translation_drift(),
                cross_track = ?self.cross_track_drift(),
                tolerance_secs,
                "caption timeline drifts from audio"
            );
        } else {
            tracing::debug!(
                audio_secs = self.audio_secs,
                primary_drift = ?self.primary_drift(),
                translation_drift = ?self.translation_drift(),
                "caption timeline drift within tolerance"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/drift.rs"]
mod tests;
