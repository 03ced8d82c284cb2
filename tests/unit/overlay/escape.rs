use super::*;

/// Every delimiter must be preceded by an odd run of backslashes, and no raw newline may remain.
fn assert_no_bare_delimiters(escaped: &str) {
    assert!(!escaped.contains('\n'));
    let chars: Vec<char> = escaped.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, ':' | ',' | '\'') {
            let run = chars[..i].iter().rev().take_while(|&&p| p == '\\').count();
            assert!(run % 2 == 1, "unescaped {c:?} at {i} in {escaped:?}");
        }
    }
}

#[test]
fn escapes_each_delimiter_distinctly() {
    assert_eq!(escape_drawtext("a:b"), r"a\:b");
    assert_eq!(escape_drawtext("a,b"), r"a\,b");
    assert_eq!(escape_drawtext("it's"), r"it\'s");
    assert_eq!(escape_drawtext("one\ntwo"), r"one\ntwo");
    assert_eq!(escape_drawtext("dos\r\nline"), r"dos\nline");
}

#[test]
fn backslashes_are_doubled_before_other_escapes() {
    assert_eq!(escape_drawtext(r"a\b"), r"a\\b");
    // A literal backslash before a colon must not turn into an escaped colon.
    assert_eq!(escape_drawtext(r"\:"), r"\\\:");
    assert_no_bare_delimiters(&escape_drawtext(r"\:"));
}

#[test]
fn mixed_caption_text_has_no_bare_delimiters() {
    let samples = [
        "Surah Al-Fatiha | Verse 1",
        "Say: \"He is Allah, [who is] One,\nAllah, the Eternal Refuge.\"",
        "Lord's, mercy: grace,\n\n'quoted'",
        "\\,\\:\\'",
    ];
    for s in samples {
        assert_no_bare_delimiters(&escape_drawtext(s));
    }
}

#[test]
fn arabic_text_passes_through() {
    let s = "\u{FD3E}ٱلْحَمْدُ لِلَّهِ \u{FD3F}٢";
    assert_eq!(escape_drawtext(s), s);
}
