//! Job configuration: segmentation, wrapping, canvas, styling and encoder settings.
//!
//! Every field has a default, so a config file only needs the keys it overrides.

/// Per-slot text styling and font discovery.
pub mod style;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{
    caption::primary::SegmentThresholds,
    caption::translation::TranslationGrouping,
    caption::wrap::WrapLimits,
    config::style::{ColorGrade, StyleSheet},
    encode::ffmpeg::EncodeSettings,
    foundation::error::{ReelError, ReelResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Output frame geometry.
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            fps: 30,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("canvas width/height must be non-zero"));
        }
        if self.fps == 0 {
            return Err(ReelError::validation("canvas fps must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ReelError::validation(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }

    /// Height the background is scaled to before cropping: a 9:16 frame at canvas width.
    pub fn scaled_height(&self) -> u32 {
        self.width * 16 / 9
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete configuration for one video job.
pub struct ReelConfig {
    pub canvas: CanvasConfig,
    pub segmentation: SegmentThresholds,
    pub translation: TranslationGrouping,
    pub wrap: WrapLimits,
    pub styles: StyleSheet,
    pub grade: ColorGrade,
    pub encode: EncodeSettings,
    /// Largest tolerated gap between a caption track's end and the audio length.
    pub drift_tolerance_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            segmentation: SegmentThresholds::default(),
            translation: TranslationGrouping::default(),
            wrap: WrapLimits::default(),
            styles: StyleSheet::default(),
            grade: ColorGrade::default(),
            encode: EncodeSettings::default(),
            drift_tolerance_secs: 1.0,
            font_path: None,
        }
    }
}

impl ReelConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r).map_err(|e| ReelError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.canvas.validate()?;
        self.segmentation.validate()?;
        self.translation.validate()?;
        self.wrap.validate()?;
        self.styles.validate()?;
        self.encode.validate()?;
        if !(self.drift_tolerance_secs >= 0.0) {
            return Err(ReelError::validation(
                "drift_tolerance_secs must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/reel.rs"]
mod tests;
