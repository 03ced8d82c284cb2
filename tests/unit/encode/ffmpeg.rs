use super::*;
use crate::overlay::filtergraph::{FilterGraph, FilterNode};

fn graph() -> FilterGraph {
    FilterGraph::new(vec![FilterNode::new("0:v", "scale=1080:1920", "out")])
}

fn value_after<'a>(args: &'a [OsString], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|a| a.to_str())
}

#[test]
fn render_args_loop_background_and_map_graph_output() {
    let inputs = RenderInputs::new("bg.mp4", "audio.mp3", "out/reel.mp4");
    let args = build_render_args(&inputs, &graph(), &EncodeSettings::default());

    assert_eq!(value_after(&args, "-stream_loop"), Some("-1"));
    assert_eq!(value_after(&args, "-filter_complex"), Some("[0:v]scale=1080:1920[out]"));
    assert_eq!(value_after(&args, "-preset"), Some("medium"));
    assert_eq!(value_after(&args, "-crf"), Some("23"));
    assert_eq!(value_after(&args, "-b:a"), Some("192k"));

    let maps: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "-map")
        .filter_map(|w| w[1].to_str())
        .collect();
    assert_eq!(maps, vec!["[out]", "1:a"]);
    assert!(args.iter().any(|a| a == "-shortest"));
    assert!(args.iter().any(|a| a == "-y"));
    assert_eq!(args.last().and_then(|a| a.to_str()), Some("out/reel.mp4"));
}

#[test]
fn background_is_first_input() {
    let inputs = RenderInputs::new("bg.mp4", "audio.mp3", "reel.mp4");
    let args = build_render_args(&inputs, &graph(), &EncodeSettings::default());
    let inputs: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "-i")
        .filter_map(|w| w[1].to_str())
        .collect();
    assert_eq!(inputs, vec!["bg.mp4", "audio.mp3"]);
}

#[test]
fn no_overwrite_uses_dash_n() {
    let mut inputs = RenderInputs::new("bg.mp4", "audio.mp3", "reel.mp4");
    inputs.overwrite = false;
    let args = build_render_args(&inputs, &graph(), &EncodeSettings::default());
    assert!(args.iter().any(|a| a == "-n"));
    assert!(!args.iter().any(|a| a == "-y"));
}

#[test]
fn crf_out_of_range_is_rejected() {
    let s = EncodeSettings {
        crf: 52,
        ..EncodeSettings::default()
    };
    assert!(s.validate().is_err());
    assert!(EncodeSettings::default().validate().is_ok());
}

#[test]
fn concat_list_uses_absolute_quoted_paths() {
    let list = concat_list(&[PathBuf::from("a.mp3"), PathBuf::from("it's.mp3")]).unwrap();
    let lines: Vec<&str> = list.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("file '"));
    assert!(lines[0].ends_with("a.mp3'"));
    assert!(Path::new(&lines[0][6..lines[0].len() - 1]).is_absolute());
    assert!(lines[1].ends_with(r"it'\''s.mp3'"));
}

#[test]
fn concat_list_path_sits_next_to_output() {
    assert_eq!(
        concat_list_path(Path::new("out/merged.mp3")),
        PathBuf::from("out/merged.mp3.concat.txt")
    );
}

#[test]
fn merge_audio_rejects_empty_and_missing_inputs() {
    let out = std::env::temp_dir().join("versereel_merge_unused.mp3");
    assert!(merge_audio(&[], &out).is_err());
    let err = merge_audio(&[PathBuf::from("/definitely/not/here.mp3")], &out).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn merge_audio_single_input_is_copied() {
    let dir = std::env::temp_dir().join(format!("versereel_merge_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let src = dir.join("one.mp3");
    std::fs::write(&src, b"ID3fake").unwrap();
    let out = dir.join("nested/merged.mp3");

    merge_audio(std::slice::from_ref(&src), &out).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), b"ID3fake");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_video_requires_existing_inputs() {
    let inputs = RenderInputs::new("/no/bg.mp4", "/no/audio.mp3", "reel.mp4");
    let err = render_video(&inputs, &graph(), &EncodeSettings::default()).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}
