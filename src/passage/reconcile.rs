use crate::foundation::error::{ReelError, ReelResult};

/// Align a passage's word tokens with its timing-boundary count.
///
/// When the counts already agree the words are returned untouched. Otherwise every token whose
/// trimmed length is at most one character is treated as a diacritic/continuation fragment and
/// appended onto the preceding retained word. A leading fragment, or a count that still disagrees
/// after merging, is an alignment error; words are never dropped or padded.
pub fn reconcile_words(
    passage: u32,
    words: Vec<String>,
    boundary_count: usize,
) -> ReelResult<Vec<String>> {
    if words.len() == boundary_count {
        return Ok(words);
    }

    let original_len = words.len();
    let mut merged: Vec<String> = Vec::with_capacity(boundary_count);
    for word in words {
        if word.trim().chars().count() > 1 {
            merged.push(word);
            continue;
        }
        let Some(prev) = merged.last_mut() else {
            return Err(ReelError::alignment(
                passage,
                format!("leading fragment {word:?} has no preceding word to attach to"),
            ));
        };
        prev.push_str(&word);
    }

    if merged.len() != boundary_count {
        return Err(ReelError::alignment(
            passage,
            format!(
                "{original_len} words ({} after merging fragments) cannot match {boundary_count} timing boundaries",
                merged.len()
            ),
        ));
    }

    tracing::debug!(
        passage,
        before = original_len,
        after = merged.len(),
        "merged continuation fragments"
    );
    Ok(merged)
}

#[cfg(test)]
#[path = "../../tests/unit/passage/reconcile.rs"]
mod tests;
