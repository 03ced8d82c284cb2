use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = ReelConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.scaled_height(), 1920);
    assert_eq!(cfg.segmentation.low, 5);
    assert_eq!(cfg.segmentation.high, 8);
    assert_eq!(cfg.translation.group_size, 10);
    assert!(cfg.wrap.primary < cfg.wrap.translation);
}

#[test]
fn empty_json_is_all_defaults() {
    let cfg = ReelConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, ReelConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = ReelConfig::from_reader(
        r#"{ "segmentation": { "low": 4 }, "wrap": { "translation": 24 }, "font_path": "fonts/a.ttf" }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.segmentation.low, 4);
    assert_eq!(cfg.segmentation.high, 8);
    assert_eq!(cfg.wrap.primary, 20);
    assert_eq!(cfg.wrap.translation, 24);
    assert_eq!(cfg.font_path, Some(PathBuf::from("fonts/a.ttf")));
    cfg.validate().unwrap();
}

#[test]
fn validation_catches_bad_values() {
    let mut cfg = ReelConfig::default();
    cfg.canvas.width = 1081;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.segmentation.high = 5;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.drift_tolerance_secs = -0.5;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.encode.crf = 99;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ReelConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}
