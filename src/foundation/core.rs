use crate::foundation::error::{ReelError, ReelResult};

/// Half-open playback window `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64, // exclusive
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> ReelResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ReelError::validation("TimeWindow bounds must be finite"));
        }
        if start > end {
            return Err(ReelError::validation("TimeWindow start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_secs(self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Convert a millisecond offset (as carried by alignment data) into seconds.
pub fn ms_to_secs(ms: i64) -> f64 {
    ms as f64 / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
