/// Escape text for an ffmpeg `drawtext` `text` option value.
///
/// The result is the option-level string; quoting for the filter-graph level is added when the
/// graph is serialized.
///
/// Backslash is escaped first so the escapes introduced here stay unambiguous. Colon, comma and
/// single quote are filter-graph delimiters; line breaks become the two-character `\n` sequence
/// that drawtext renders as a new line. Carriage returns are dropped.
pub fn escape_drawtext(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            ':' => out.push_str(r"\:"),
            ',' => out.push_str(r"\,"),
            '\'' => out.push_str(r"\'"),
            '\n' => out.push_str(r"\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/escape.rs"]
mod tests;
