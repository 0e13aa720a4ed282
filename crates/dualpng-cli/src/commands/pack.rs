//! Pack command
//!
//! Builds a dual-background PNG from two source images.

use crate::PackArgs;
use anyhow::{Context, Result};
use dualpng_io::Format;
use dualpng_ops::{pipeline::pack_files, Brightness, Filter, PackOptions};
use std::path::Path;
use tracing::{debug, warn};

pub fn run(args: PackArgs, verbose: u8) -> Result<()> {
    let options = resolve_options(&args)?;
    debug!(?options, "resolved options");

    if !is_png_path(&args.output) {
        warn!(
            output = %args.output.display(),
            "output is always PNG-encoded; use a .{} extension",
            Format::Png.extension()
        );
    }

    let report = pack_files(&args.black, &args.white, &args.output, &options).with_context(|| {
        format!(
            "Failed to pack {} + {}",
            args.black.display(),
            args.white.display()
        )
    })?;

    if verbose > 0 {
        println!(
            "{} ({}x{}) + {} ({}x{}) -> {} ({}x{})",
            args.black.display(),
            report.black.0,
            report.black.1,
            args.white.display(),
            report.white.0,
            report.white.1,
            args.output.display(),
            report.output.0,
            report.output.1,
        );
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_options(args: &PackArgs) -> Result<PackOptions> {
    let mut options = match &args.config {
        Some(path) => PackOptions::from_file(path)?,
        None => PackOptions::default(),
    };

    if let Some(v) = args.black_brightness {
        options = options.with_black_brightness(Brightness::new(v).context("--black-brightness")?);
    }
    if let Some(v) = args.white_brightness {
        options = options.with_white_brightness(Brightness::new(v).context("--white-brightness")?);
    }
    if let Some(name) = &args.filter {
        options = options.with_filter(name.parse::<Filter>()?);
    }
    Ok(options)
}

fn is_png_path(path: &Path) -> bool {
    Format::from_extension(path) == Format::Png
}
