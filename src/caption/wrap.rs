use crate::foundation::error::{ReelError, ReelResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Per-track maximum characters per caption line.
pub struct WrapLimits {
    /// Centered primary-script track (larger font, narrower limit).
    pub primary: usize,
    /// Bottom translation track (smaller font, wider limit).
    pub translation: usize,
}

impl Default for WrapLimits {
    fn default() -> Self {
        Self {
            primary: 20,
            translation: 30,
        }
    }
}

impl WrapLimits {
    pub fn validate(&self) -> ReelResult<()> {
        if self.primary == 0 || self.translation == 0 {
            return Err(ReelError::validation("wrap limits must be non-zero"));
        }
        Ok(())
    }
}

/// Greedy word wrap on a character-count budget.
///
/// A word joins the current line while `line_chars + word_chars + words_on_line <= max_chars`
/// (one separator per word already on the line). A word longer than `max_chars` is never split;
/// it occupies its own line. Lines are joined with `\n`.
pub fn wrap_text(text: &str, max_chars: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<&str> = Vec::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if !line.is_empty() && line_chars + word_chars + line.len() > max_chars {
            lines.push(line.join(" "));
            line.clear();
            line_chars = 0;
        }
        line.push(word);
        line_chars += word_chars;
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/caption/wrap.rs"]
mod tests;
