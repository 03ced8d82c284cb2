#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A unit of caption text with a display duration, not yet anchored on the video timeline.
pub struct Cue {
    /// Display text, including any passage-end ornamentation.
    pub text: String,
    /// Display duration in seconds.
    pub duration_secs: f64,
}

impl Cue {
    pub fn new(text: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            text: text.into(),
            duration_secs,
        }
    }

    /// Number of whitespace-separated tokens in the text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
