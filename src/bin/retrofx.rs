use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "retrofx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an effect chain to a PNG.
    Apply(ApplyArgs),
    /// Print a chain containing every effect with default options.
    Defaults,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Effect chain JSON, e.g. `{"effects":[{"kind":"glitch"}]}`.
    #[arg(long)]
    chain: PathBuf,

    /// Seed for the stochastic effects. Unseeded runs differ every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Apply the chain this many times, as if rendering consecutive frames.
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn read_chain(path: &Path) -> anyhow::Result<retrofx::EffectChain> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read chain '{}'", path.display()))?;
    let chain = retrofx::EffectChain::from_json(&text)
        .with_context(|| format!("parse chain '{}'", path.display()))?;
    Ok(chain)
}

fn read_frame(path: &Path) -> anyhow::Result<retrofx::FrameBuffer> {
    let img = image::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .into_rgba8();
    let (w, h) = img.dimensions();
    Ok(retrofx::FrameBuffer::from_rgba(w, h, img.into_raw())?)
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let chain = read_chain(&args.chain)?;
    let mut frame = read_frame(&args.in_path)?;

    let mut ctx = match args.seed {
        Some(seed) => retrofx::FxContext::with_seed(seed),
        None => retrofx::FxContext::new(),
    };
    for _ in 0..args.frames {
        chain.apply(&mut ctx, &mut frame);
    }
    tracing::debug!(?ctx, "chain applied");

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let (w, h) = (frame.width(), frame.height());
    image::save_buffer_with_format(
        &args.out,
        &frame.into_rgba(),
        w,
        h,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    let json = retrofx::EffectChain::with_all_defaults().to_json_pretty()?;
    println!("{json}");
    Ok(())
}
