use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{ReelError, ReelResult};
use crate::overlay::filtergraph::FilterGraph;

/// x264/AAC settings for the final MP4.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    pub preset: String,
    /// Constant rate factor, 0..=51.
    pub crf: u8,
    pub audio_bitrate: String,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            preset: "medium".to_owned(),
            crf: 23,
            audio_bitrate: "192k".to_owned(),
        }
    }
}

impl EncodeSettings {
    pub fn validate(&self) -> ReelResult<()> {
        if self.crf > 51 {
            return Err(ReelError::validation(format!(
                "crf must be in 0..=51, got {}",
                self.crf
            )));
        }
        if self.preset.trim().is_empty() {
            return Err(ReelError::validation("encode preset must be non-empty"));
        }
        if self.audio_bitrate.trim().is_empty() {
            return Err(ReelError::validation("audio_bitrate must be non-empty"));
        }
        Ok(())
    }
}

/// Media files for one render.
#[derive(Clone, Debug)]
pub struct RenderInputs {
    /// Background video, looped for the length of the audio.
    pub background: PathBuf,
    pub audio: PathBuf,
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl RenderInputs {
    pub fn new(
        background: impl Into<PathBuf>,
        audio: impl Into<PathBuf>,
        out_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            background: background.into(),
            audio: audio.into(),
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Build the `ffmpeg` argument list for compositing `graph` over the looped background.
///
/// The output stops at the shorter stream, which in practice is the audio.
pub fn build_render_args(
    inputs: &RenderInputs,
    graph: &FilterGraph,
    settings: &EncodeSettings,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-loglevel".into(),
        "error".into(),
        "-stream_loop".into(),
        "-1".into(),
        "-i".into(),
        inputs.background.clone().into_os_string(),
        "-i".into(),
        inputs.audio.clone().into_os_string(),
        "-filter_complex".into(),
        graph.to_string().into(),
        "-map".into(),
        format!("[{}]", graph.output_label()).into(),
        "-map".into(),
        "1:a".into(),
    ];
    args.extend(
        [
            "-c:v",
            "libx264",
            "-preset",
            settings.preset.as_str(),
            "-crf",
        ]
        .map(OsString::from),
    );
    args.push(settings.crf.to_string().into());
    args.extend(
        [
            "-pix_fmt",
            "yuv420p",
            "-c:a",
            "aac",
            "-b:a",
            settings.audio_bitrate.as_str(),
            "-shortest",
            "-movflags",
            "+faststart",
            if inputs.overwrite { "-y" } else { "-n" },
        ]
        .map(OsString::from),
    );
    args.push(inputs.out_path.clone().into_os_string());
    args
}

/// Run `ffmpeg` to produce the captioned video.
#[tracing::instrument(skip(graph, settings), fields(ops = graph.len()))]
pub fn render_video(
    inputs: &RenderInputs,
    graph: &FilterGraph,
    settings: &EncodeSettings,
) -> ReelResult<()> {
    settings.validate()?;
    for (what, p) in [("background", &inputs.background), ("audio", &inputs.audio)] {
        if !p.is_file() {
            return Err(ReelError::validation(format!(
                "{what} file '{}' does not exist",
                p.display()
            )));
        }
    }
    ensure_parent_dir(&inputs.out_path)?;
    if !inputs.overwrite && inputs.out_path.exists() {
        return Err(ReelError::validation(format!(
            "output file '{}' already exists",
            inputs.out_path.display()
        )));
    }

    run_ffmpeg(build_render_args(inputs, graph, settings))?;
    tracing::info!(out = %inputs.out_path.display(), "video rendered");
    Ok(())
}

/// Concatenate audio files in order into `out_path` without re-encoding.
///
/// A single input is copied as-is. The concat list is written next to `out_path` and removed
/// afterwards.
#[tracing::instrument(skip(inputs), fields(inputs = inputs.len()))]
pub fn merge_audio(inputs: &[PathBuf], out_path: &Path) -> ReelResult<()> {
    if inputs.is_empty() {
        return Err(ReelError::validation("merge_audio needs at least one input"));
    }
    for p in inputs {
        if !p.is_file() {
            return Err(ReelError::validation(format!(
                "audio file '{}' does not exist",
                p.display()
            )));
        }
    }
    ensure_parent_dir(out_path)?;

    if let [single] = inputs {
        std::fs::copy(single, out_path).map_err(|e| {
            ReelError::encode(format!(
                "copy '{}' to '{}': {e}",
                single.display(),
                out_path.display()
            ))
        })?;
        return Ok(());
    }

    let list_path = concat_list_path(out_path);
    std::fs::write(&list_path, concat_list(inputs)?).map_err(|e| {
        ReelError::encode(format!(
            "write concat list '{}': {e}",
            list_path.display()
        ))
    })?;

    let args: Vec<OsString> = vec![
        "-loglevel".into(),
        "error".into(),
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        list_path.clone().into_os_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        out_path.as_os_str().to_owned(),
    ];
    let result = run_ffmpeg(args);
    if let Err(e) = std::fs::remove_file(&list_path) {
        tracing::debug!(path = %list_path.display(), error = %e, "concat list cleanup failed");
    }
    result?;

    let len = std::fs::metadata(out_path).map(|m| m.len()).unwrap_or(0);
    if len == 0 {
        return Err(ReelError::encode(format!(
            "merged audio '{}' is missing or empty",
            out_path.display()
        )));
    }
    tracing::info!(out = %out_path.display(), bytes = len, "audio merged");
    Ok(())
}

fn concat_list_path(out_path: &Path) -> PathBuf {
    let mut name = out_path.as_os_str().to_owned();
    name.push(".concat.txt");
    PathBuf::from(name)
}

/// Contents of an ffmpeg concat-demuxer list: one `file '<abs path>'` line per input.
pub fn concat_list(inputs: &[PathBuf]) -> ReelResult<String> {
    let mut out = String::new();
    for p in inputs {
        let abs = std::path::absolute(p).map_err(|e| {
            ReelError::validation(format!("resolve '{}': {e}", p.display()))
        })?;
        let s = abs.to_str().ok_or_else(|| {
            ReelError::validation(format!("path '{}' is not valid UTF-8", abs.display()))
        })?;
        out.push_str("file '");
        out.push_str(&s.replace('\'', r"'\''"));
        out.push_str("'\n");
    }
    Ok(out)
}

fn run_ffmpeg(args: Vec<OsString>) -> ReelResult<()> {
    if !is_ffmpeg_on_path() {
        return Err(ReelError::encode(
            "ffmpeg is required for encoding, but was not found on PATH",
        ));
    }
    tracing::debug!(argc = args.len(), "spawning ffmpeg");
    let output = Command::new("ffmpeg")
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            ReelError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReelError::encode(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
