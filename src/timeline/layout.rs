use crate::{caption::cue::Cue, foundation::core::TimeWindow};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A cue anchored to an absolute `[start, end)` window on the video timeline (seconds).
pub struct TimedCue {
    pub cue: Cue,
    pub start: f64,
    pub end: f64,
}

impl TimedCue {
    pub fn text(&self) -> &str {
        &self.cue.text
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start,
            end: self.end,
        }
    }
}

/// Anchor cues back to back starting at zero.
///
/// `start[0] = 0`, `end[i] = start[i] + duration[i]` and `start[i + 1] = end[i]` exactly; the
/// running end is carried forward as-is so adjacent windows share the same `f64` boundary.
pub fn layout(cues: Vec<Cue>) -> Vec<TimedCue> {
    let mut t = 0.0f64;
    cues.into_iter()
        .map(|cue| {
            let start = t;
            let end = start + cue.duration_secs;
            t = end;
            TimedCue { cue, start, end }
        })
        .collect()
}

/// End of the last cue, or `None` for an empty track.
pub fn track_end(track: &[TimedCue]) -> Option<f64> {
    track.last().map(|c| c.end)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/layout.rs"]
mod tests;
