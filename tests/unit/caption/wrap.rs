use super::*;

fn assert_lines_within(wrapped: &str, max: usize) {
    for line in wrapped.lines() {
        let n = line.chars().count();
        assert!(
            n <= max || !line.contains(' '),
            "line {line:?} has {n} chars (max {max})"
        );
    }
}

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap_text("in the name", 20), "in the name");
}

#[test]
fn breaks_before_the_limit_is_exceeded() {
    let out = wrap_text("aaaa bbbb cccc dddd", 9);
    assert_eq!(out, "aaaa bbbb\ncccc dddd");
    assert_lines_within(&out, 9);
}

#[test]
fn exact_fit_is_allowed() {
    // 3 + 1 + 3 + 1 + 3 = 11
    assert_eq!(wrap_text("abc def ghi", 11), "abc def ghi");
    assert_eq!(wrap_text("abc def ghi", 10), "abc def\nghi");
}

#[test]
fn overlong_word_gets_its_own_line_untruncated() {
    let out = wrap_text("to incomprehensibilities we go", 10);
    assert_eq!(out, "to\nincomprehensibilities\nwe go");
    assert_lines_within(&out, 10);
}

#[test]
fn counts_characters_not_bytes() {
    // Each Arabic word is 5 code points but 10 bytes.
    let out = wrap_text("ٱلْحَ ٱلْحَ ٱلْحَ", 11);
    assert_eq!(out, "ٱلْحَ ٱلْحَ\nٱلْحَ");
}

#[test]
fn collapses_whitespace_and_handles_empty() {
    assert_eq!(wrap_text("  a   b  ", 20), "a b");
    assert_eq!(wrap_text("", 20), "");
}

#[test]
fn long_passage_never_exceeds_limit() {
    let text = "And We have certainly made the Quran easy for remembrance so is there any who will remember";
    for max in [8usize, 12, 18, 30] {
        assert_lines_within(&wrap_text(text, max), max);
    }
}

#[test]
fn zero_limits_are_rejected() {
    assert!(WrapLimits::default().validate().is_ok());
    assert!(
        WrapLimits {
            primary: 0,
            translation: 10
        }
        .validate()
        .is_err()
    );
}
