use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{ReelError, ReelResult},
    overlay::program::OverlaySlot,
};

const CENTER_X: &str = "(w-text_w)/2";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// drawtext styling for one overlay slot. Positions are ffmpeg drawtext expressions.
pub struct TextStyle {
    pub font_size: u32,
    pub font_color: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: u32,
    #[serde(default = "default_center_x")]
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<u32>,
}

fn default_border_color() -> String {
    "black".to_owned()
}

fn default_center_x() -> String {
    CENTER_X.to_owned()
}

impl TextStyle {
    fn centered(font_size: u32, font_color: &str, border_width: u32, y: &str) -> Self {
        Self {
            font_size,
            font_color: font_color.to_owned(),
            border_color: default_border_color(),
            border_width,
            x: default_center_x(),
            y: y.to_owned(),
            line_spacing: None,
        }
    }

    fn with_line_spacing(mut self, px: u32) -> Self {
        self.line_spacing = Some(px);
        self
    }

    pub fn validate(&self, slot: OverlaySlot) -> ReelResult<()> {
        if self.font_size == 0 {
            return Err(ReelError::validation(format!(
                "{} font_size must be non-zero",
                slot.as_str()
            )));
        }
        if self.font_color.is_empty() || self.x.is_empty() || self.y.is_empty() {
            return Err(ReelError::validation(format!(
                "{} font_color/x/y must be non-empty",
                slot.as_str()
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// One [`TextStyle`] per overlay slot.
pub struct StyleSheet {
    pub primary_title: TextStyle,
    pub primary_subtitle: TextStyle,
    pub primary_cue: TextStyle,
    pub translation_title: TextStyle,
    pub translation_subtitle: TextStyle,
    pub translation_cue: TextStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            primary_title: TextStyle::centered(50, "gold", 2, "60"),
            primary_subtitle: TextStyle::centered(40, "white@0.9", 2, "130"),
            primary_cue: TextStyle::centered(60, "white", 3, "(h-text_h)/2").with_line_spacing(10),
            translation_title: TextStyle::centered(45, "gold", 2, "h-180"),
            translation_subtitle: TextStyle::centered(38, "white@0.9", 2, "h-120"),
            translation_cue: TextStyle::centered(32, "white", 2, "h-350").with_line_spacing(8),
        }
    }
}

impl StyleSheet {
    pub fn for_slot(&self, slot: OverlaySlot) -> &TextStyle {
        match slot {
            OverlaySlot::PrimaryTitle => &self.primary_title,
            OverlaySlot::PrimarySubtitle => &self.primary_subtitle,
            OverlaySlot::PrimaryCue => &self.primary_cue,
            OverlaySlot::TranslationTitle => &self.translation_title,
            OverlaySlot::TranslationSubtitle => &self.translation_subtitle,
            OverlaySlot::TranslationCue => &self.translation_cue,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        for slot in [
            OverlaySlot::PrimaryTitle,
            OverlaySlot::PrimarySubtitle,
            OverlaySlot::PrimaryCue,
            OverlaySlot::TranslationTitle,
            OverlaySlot::TranslationSubtitle,
            OverlaySlot::TranslationCue,
        ] {
            self.for_slot(slot).validate(slot)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// `eq` filter adjustment applied to the background before any text.
pub struct ColorGrade {
    pub brightness: f64,
    pub contrast: f64,
}

impl Default for ColorGrade {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.1,
        }
    }
}

/// Platform font candidates with broad Arabic coverage, most preferred first.
pub fn font_candidates() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &["C:/Windows/Fonts/arial.ttf"]
    } else if cfg!(target_os = "macos") {
        &["/Library/Fonts/Arial.ttf"]
    } else {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
    }
}

/// Pick the font for drawtext: an explicit path wins, else the first existing candidate, else
/// the first candidate as-is.
pub fn resolve_font_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let candidates = font_candidates();
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .unwrap_or_else(|| PathBuf::from(candidates[0]))
}

#[cfg(test)]
#[path = "../../tests/unit/config/style.rs"]
mod tests;
