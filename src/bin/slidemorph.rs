use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slidemorph::{
    Canvas, FrameIndex, FrameRange, MorphOverlay, PreparedTransition, SampleOpts,
    TransitionConfig, evaluate, sample_range,
};

#[derive(Parser, Debug)]
#[command(name = "slidemorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report problems in a transition config.
    Check(CheckArgs),
    /// Evaluate a single frame and print it as JSON.
    Eval(EvalArgs),
    /// Evaluate a frame range and print one JSON line per frame.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input transition config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Exit with an error if any issue is found.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input transition config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame the transition window starts at.
    #[arg(long, allow_negative_numbers = true)]
    trigger: i64,

    /// Frame to evaluate.
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    /// Emit the compositor overlay for this canvas (`WIDTHxHEIGHT`) instead of the raw result.
    #[arg(long, value_parser = parse_canvas)]
    overlay: Option<Canvas>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input transition config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame the transition window starts at.
    #[arg(long, allow_negative_numbers = true)]
    trigger: i64,

    /// First frame (inclusive). Defaults to the trigger frame.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last frame (exclusive). Defaults to the end of the transition window.
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn parse_canvas(s: &str) -> Result<Canvas, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Canvas { width, height })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn load(path: &Path) -> anyhow::Result<TransitionConfig> {
    TransitionConfig::from_path(path)
        .with_context(|| format!("load transition config '{}'", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = load(&args.in_path)?;
    let issues = cfg.diagnose();
    for issue in &issues {
        eprintln!("{}: {issue}", cfg.transition_id);
    }
    if issues.is_empty() {
        eprintln!("{}: ok", cfg.transition_id);
    } else if args.strict {
        anyhow::bail!("{} issue(s) in '{}'", issues.len(), args.in_path.display());
    }
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let cfg = load(&args.in_path)?;
    let result = evaluate(Some(&cfg), FrameIndex(args.trigger), FrameIndex(args.frame));

    let json = match args.overlay {
        Some(canvas) => {
            serde_json::to_string_pretty(&MorphOverlay::build(&cfg, &result, canvas))
        }
        None => serde_json::to_string_pretty(&result),
    }
    .context("serialize evaluation")?;
    println!("{json}");
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let prepared = PreparedTransition::new(load(&args.in_path)?);
    let trigger = FrameIndex(args.trigger);
    let window_end = prepared.active_window(trigger).map_or(trigger, |w| w.end);

    let range = FrameRange::new(
        FrameIndex(args.start.unwrap_or(args.trigger)),
        FrameIndex(args.end.unwrap_or(window_end.0)),
    )?;
    let opts = SampleOpts {
        parallel: args.parallel,
        threads: args.threads,
    };

    let samples = sample_range(&prepared, trigger, range, opts)?;
    for s in &samples {
        println!(
            "{}",
            serde_json::to_string(s).context("serialize frame sample")?
        );
    }
    eprintln!("sampled {} frame(s)", samples.len());
    Ok(())
}
