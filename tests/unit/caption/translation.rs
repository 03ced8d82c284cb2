use super::*;

fn segmenter() -> TranslationSegmenter {
    TranslationSegmenter::new(TranslationGrouping::default()).unwrap()
}

#[test]
fn twenty_five_words_make_three_even_groups() {
    let words: Vec<String> = (0..25).map(|i| format!("t{i}")).collect();
    let cues = segmenter().segment(&words, 10.0);

    let sizes: Vec<usize> = cues.iter().map(Cue::word_count).collect();
    assert_eq!(sizes, vec![10, 10, 5]);

    let expected = 10.0 / 3.0 + 0.25;
    for cue in &cues {
        assert!((cue.duration_secs - expected).abs() < 1e-9);
    }
    assert!(cues[2].text.starts_with("t20 "));
    assert!(cues[2].text.ends_with("t24"));
}

#[test]
fn exact_multiple_has_no_trailing_group() {
    let words = ["a"; 20];
    let cues = segmenter().segment(&words, 8.0);
    assert_eq!(cues.len(), 2);
    assert!((cues[0].duration_secs - 4.25).abs() < 1e-9);
}

#[test]
fn zero_words_yield_zero_cues() {
    let words: [&str; 0] = [];
    assert!(segmenter().segment(&words, 5.0).is_empty());
}

#[test]
fn passage_translation_is_split_on_whitespace() {
    let p = Passage::new(1, Vec::new(), Vec::new(), "In  the name\nof Allah", 2000).unwrap();
    let cues = segmenter().segment_passage(&p);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "In the name of Allah");
    assert!((cues[0].duration_secs - 2.25).abs() < 1e-9);
}

#[test]
fn zero_group_size_is_rejected() {
    assert!(
        TranslationSegmenter::new(TranslationGrouping {
            group_size: 0,
            pad_secs: 0.25
        })
        .is_err()
    );
}
