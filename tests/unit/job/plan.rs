use super::*;
use crate::overlay::program::OverlaySlot;
use crate::passage::model::{Passage, TimingBoundary};

fn passage(number: u32, words: &[&str], bounds: &[(i64, i64)], translation: &str, ms: i64) -> Passage {
    Passage::new(
        number,
        words.iter().map(|w| (*w).to_owned()).collect(),
        bounds
            .iter()
            .map(|&(s, e)| TimingBoundary::new(s, e))
            .collect(),
        translation,
        ms,
    )
    .unwrap()
}

fn group() -> Group {
    Group {
        id: "fatiha_1_2".to_owned(),
        surah: 1,
        ayah_start: 1,
        ayah_end: 2,
        reciter_name: "abdul basit".to_owned(),
        duration_ms: None,
        passages: vec![
            passage(
                1,
                &["بسم", "الله", "الرحمن"],
                &[(0, 500), (500, 1000), (1000, 2000)],
                "In the name",
                2500,
            ),
            passage(2, &["الحمد", "لله"], &[(0, 1000), (1000, 1500)], "Praise be", 2000),
        ],
    }
}

fn statics() -> StaticElements {
    StaticElements {
        primary_title: "سورة الفاتحة ١-٢".to_owned(),
        primary_subtitle: "عبد الباسط".to_owned(),
        translation_title: "Al-Fatiha | Verses 1-2".to_owned(),
        translation_subtitle: "Abdul Basit".to_owned(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn both_tracks_share_one_clock_across_passages() {
    let plan = plan_job(&group(), &statics(), &ReelConfig::default(), JobOptions::default()).unwrap();

    assert_eq!(plan.group_id, "fatiha_1_2");
    assert_eq!(plan.primary.len(), 2);
    assert!(approx(plan.primary[0].end, 3.0));
    assert!(approx(plan.primary[1].start, 3.0));
    assert!(approx(plan.primary[1].end, 5.5));
    assert!(plan.primary[1].text().ends_with('٢'));

    assert_eq!(plan.translation.len(), 2);
    assert!(approx(plan.translation[0].end, 2.75));
    assert!(approx(plan.translation[1].end, 5.0));

    assert_eq!(plan.program.len(), 4 + 2 + 2);
    assert!(approx(plan.drift.audio_secs, 4.5));
    assert!(approx(plan.drift.primary_drift().unwrap(), 1.0));
}

#[test]
fn disabled_track_keeps_its_titles() {
    let opts = JobOptions {
        primary: true,
        translation: false,
    };
    let plan = plan_job(&group(), &statics(), &ReelConfig::default(), opts).unwrap();
    assert!(plan.translation.is_empty());
    assert_eq!(plan.drift.translation_end_secs, None);

    let slots: Vec<OverlaySlot> = plan.program.iter().map(|op| op.slot()).collect();
    assert!(slots.contains(&OverlaySlot::TranslationTitle));
    assert!(slots.contains(&OverlaySlot::TranslationSubtitle));
    assert!(!slots.contains(&OverlaySlot::TranslationCue));
}

#[test]
fn invalid_config_is_rejected_before_segmenting() {
    let mut cfg = ReelConfig::default();
    cfg.translation.group_size = 0;
    assert!(plan_job(&group(), &statics(), &cfg, JobOptions::default()).is_err());
}

#[test]
fn filter_graph_uses_configured_font() {
    let cfg = ReelConfig {
        font_path: Some("/fonts/Amiri.ttf".into()),
        ..ReelConfig::default()
    };
    let plan = plan_job(&group(), &statics(), &cfg, JobOptions::default()).unwrap();
    let graph = plan.filter_graph(&cfg);
    assert_eq!(graph.output_label(), "out");
    assert!(graph.to_string().contains("fontfile='/fonts/Amiri.ttf'"));
    assert_eq!(graph.len(), 3 + plan.program.len());
}
