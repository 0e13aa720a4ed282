//! dualpng - pack two images into one PNG that changes with its background

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dualpng")]
#[command(author, version, about = "Pack two images into one dual-background PNG")]
#[command(long_about = "
Builds a PNG that shows one picture over a black background and another
over a white one. The two inputs are fitted onto a common grid and
interleaved on a checkerboard, with each cell's luminance stored in alpha.

Examples:
  dualpng pack night.jpg day.png -o packed.png
  dualpng pack a.png b.png -o out.png --black-brightness 0.7 --filter lanczos3
  dualpng pack a.png b.png -o out.png --config pack.yaml
  dualpng reveal packed.png -o on_white.png --background white
  dualpng info packed.png night.jpg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a black-background and a white-background image
    #[command(visible_alias = "p")]
    Pack(PackArgs),

    /// Composite a packed image over black or white
    #[command(visible_alias = "r")]
    Reveal(RevealArgs),

    /// Show image format and dimensions
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct PackArgs {
    /// Image shown over a black background
    black: PathBuf,

    /// Image shown over a white background
    white: PathBuf,

    /// Output PNG file
    #[arg(short, long)]
    output: PathBuf,

    /// Brightness multiplier for the black image [default: 0.5]
    #[arg(short = 'b', long)]
    black_brightness: Option<f64>,

    /// Brightness multiplier for the white image [default: 1.0]
    #[arg(short = 'w', long)]
    white_brightness: Option<f64>,

    /// Filter: nearest, bilinear, bicubic, lanczos3 [default: bilinear]
    #[arg(short, long)]
    filter: Option<String>,

    /// YAML file with pack options; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RevealArgs {
    /// Packed PNG
    input: PathBuf,

    /// Output PNG file
    #[arg(short, long)]
    output: PathBuf,

    /// Background to composite over: black or white
    #[arg(long, default_value = "white")]
    background: String,
}

#[derive(Args)]
struct InfoArgs {
    /// Image files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack(args) => commands::pack::run(args, cli.verbose),
        Commands::Reveal(args) => commands::reveal::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
