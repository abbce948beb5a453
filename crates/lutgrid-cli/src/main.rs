//! lutgrid - inspect and evaluate lookup grids
//!
//! Grids are read and written in the JSON exchange form produced by
//! `GridDetails`.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use lutgrid_lut::Interpolation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lutgrid")]
#[command(author, version, about = "Inspect and evaluate 1D/3D lookup grids")]
#[command(long_about = "
Evaluates colour transforms sampled on 1D or 3D lookup grids with cubic
(Hermite/tricubic) or linear (trilinear) interpolation. Inputs outside the
grid domain are extrapolated linearly.

Examples:
  lutgrid identity -o id.json --dims 3 --size 33
  lutgrid info grade.json
  lutgrid eval grade.json 0.5 0.3 0.2 --mode linear
  lutgrid eval grade.json -- -0.1 0.5 1.2
  lutgrid luma curve.json 0.18 --rgb
  lutgrid curve curve.json --steps 33 --margin 0.1
  lutgrid apply grade.json -i plate.rgb -o graded.rgb -j 8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Show grid metadata
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Evaluate one RGB input
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Evaluate one luma input
    #[command(visible_alias = "l")]
    Luma(LumaArgs),

    /// Tabulate the grid along its luma axis
    #[command(visible_alias = "c")]
    Curve(CurveArgs),

    /// Transform a raw interleaved RGB f32 buffer
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Write an identity grid
    Identity(IdentityArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Grid file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EvalArgs {
    /// Grid file
    grid: PathBuf,

    /// Red input
    #[arg(allow_negative_numbers = true)]
    r: f64,

    /// Green input
    #[arg(allow_negative_numbers = true)]
    g: f64,

    /// Blue input
    #[arg(allow_negative_numbers = true)]
    b: f64,

    /// Interpolation (cubic, linear)
    #[arg(short, long, default_value = "cubic")]
    mode: Interpolation,

    /// Also print the luma of the result
    #[arg(long)]
    luma: bool,
}

#[derive(Args)]
struct LumaArgs {
    /// Grid file
    grid: PathBuf,

    /// Luma input
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Interpolation (cubic, linear)
    #[arg(short, long, default_value = "cubic")]
    mode: Interpolation,

    /// Print one value per output channel
    #[arg(long)]
    rgb: bool,
}

#[derive(Args)]
struct CurveArgs {
    /// Grid file
    grid: PathBuf,

    /// Number of evenly spaced samples across the domain
    #[arg(short, long, default_value = "17")]
    steps: usize,

    /// Extra range sampled beyond each end of the domain
    #[arg(long, default_value = "0.0")]
    margin: f64,

    /// Interpolation (cubic, linear)
    #[arg(short, long, default_value = "cubic")]
    mode: Interpolation,

    /// Print one column per output channel
    #[arg(long)]
    rgb: bool,
}

#[derive(Args)]
struct ApplyArgs {
    /// Grid file
    grid: PathBuf,

    /// Input buffer (little-endian f32, RGB interleaved)
    #[arg(short, long)]
    input: PathBuf,

    /// Output buffer
    #[arg(short, long)]
    output: PathBuf,

    /// Interpolation (cubic, linear)
    #[arg(short, long, default_value = "cubic")]
    mode: Interpolation,
}

#[derive(Args)]
struct IdentityArgs {
    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Axis count (1 or 3)
    #[arg(short, long, default_value = "3")]
    dims: usize,

    /// Samples per axis
    #[arg(short, long, default_value = "33")]
    size: usize,

    /// Grid title
    #[arg(short, long, default_value = "identity")]
    title: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let verbose = cli.verbose > 0;
    match cli.command {
        Commands::Info(args) => commands::info::run(args, verbose),
        Commands::Eval(args) => commands::eval::run(args, verbose),
        Commands::Luma(args) => commands::luma::run(args, verbose),
        Commands::Curve(args) => commands::curve::run(args, verbose),
        Commands::Apply(args) => commands::apply::run(args, verbose),
        Commands::Identity(args) => commands::identity::run(args, verbose),
    }
}
