use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "versereel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a group's captions and print the ffmpeg filter graph (or the full plan as JSON).
    Plan(PlanArgs),
    /// Compile captions and encode the final MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Concatenate audio clips into one file without re-encoding (requires `ffmpeg` on PATH).
    MergeAudio(MergeAudioArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Groups JSON file.
    #[arg(long)]
    groups: PathBuf,

    /// Group id inside the groups file. May be omitted when the file holds a single group.
    #[arg(long)]
    group: Option<String>,

    /// Directory holding `surah_names.json` and `reciter_names.json`.
    #[arg(long, default_value = ".")]
    names: PathBuf,

    /// Config JSON; missing keys take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for all text, overriding the config and platform discovery.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Omit primary-script caption cues.
    #[arg(long)]
    no_primary: bool,

    /// Omit translation caption cues.
    #[arg(long)]
    no_translation: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Print the whole plan (tracks, overlay program, drift, filter graph) as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Background video, looped for the length of the audio.
    #[arg(long)]
    background: PathBuf,

    /// Merged recitation audio.
    #[arg(long)]
    audio: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct MergeAudioArgs {
    /// Output audio path.
    #[arg(long)]
    out: PathBuf,

    /// Input clips, in playback order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Render(args) => cmd_render(args),
        Command::MergeAudio(args) => cmd_merge_audio(args),
    }
}

fn load_config(args: &JobArgs) -> anyhow::Result<versereel::ReelConfig> {
    let mut cfg = match &args.config {
        Some(p) => versereel::ReelConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => versereel::ReelConfig::default(),
    };
    if let Some(font) = &args.font {
        cfg.font_path = Some(font.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn plan(args: &JobArgs) -> anyhow::Result<(versereel::ReelConfig, versereel::JobPlan)> {
    let cfg = load_config(args)?;
    let file = versereel::GroupFile::from_path(&args.groups)
        .with_context(|| format!("load groups '{}'", args.groups.display()))?;

    let id = match &args.group {
        Some(id) => id.clone(),
        None => {
            let ids: Vec<&str> = file.group_ids().collect();
            match ids.as_slice() {
                [only] => (*only).to_owned(),
                _ => anyhow::bail!(
                    "--group is required when the file holds {} groups (available: {})",
                    ids.len(),
                    ids.join(", ")
                ),
            }
        }
    };
    let group = file
        .group(&id)
        .with_context(|| format!("load group '{id}'"))?;

    let names = versereel::NameCatalog::from_dir(&args.names)
        .with_context(|| format!("load names from '{}'", args.names.display()))?;
    let statics = versereel::static_elements(&group, &names);

    let opts = versereel::JobOptions {
        primary: !args.no_primary,
        translation: !args.no_translation,
    };
    let plan = versereel::plan_job(&group, &statics, &cfg, opts)?;
    Ok((cfg, plan))
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (cfg, plan) = plan(&args.job)?;
    let graph = plan.filter_graph(&cfg);

    if args.json {
        let dump = serde_json::json!({
            "plan": plan,
            "filter_graph": graph.to_string(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("serialize plan")?
        );
    } else {
        println!("{graph}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (cfg, plan) = plan(&args.job)?;
    let graph = plan.filter_graph(&cfg);

    let mut inputs = versereel::RenderInputs::new(args.background, args.audio, args.out);
    inputs.overwrite = !args.no_overwrite;
    versereel::render_video(&inputs, &graph, &cfg.encode)?;

    eprintln!("wrote {}", inputs.out_path.display());
    Ok(())
}

fn cmd_merge_audio(args: MergeAudioArgs) -> anyhow::Result<()> {
    versereel::merge_audio(&args.inputs, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
