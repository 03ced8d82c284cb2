/// Arabic-Indic digit glyphs, indexed by Western digit value.
pub const NATIVE_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Render `n` in the script's native numerals, digit by digit.
pub fn native_numerals(n: u32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NATIVE_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Render an inclusive passage range, collapsing to a single number when `start == end`.
pub fn native_range(start: u32, end: u32) -> String {
    if start == end {
        native_numerals(start)
    } else {
        format!("{}-{}", native_numerals(start), native_numerals(end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/numerals.rs"]
mod tests;
