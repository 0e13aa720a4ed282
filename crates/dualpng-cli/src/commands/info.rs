//! Info command
//!
//! Prints format, dimensions and file size without decoding pixels.

use crate::InfoArgs;
use anyhow::{Context, Result};

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.inputs {
        let (format, width, height) = dualpng_io::probe(path)
            .with_context(|| format!("Failed to inspect: {}", path.display()))?;

        if verbose > 0 {
            let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            println!(
                "{}: {} {}x{} ({})",
                path.display(),
                format,
                width,
                height,
                super::format_size(size)
            );
        } else {
            println!("{}: {} {}x{}", path.display(), format, width, height);
        }
    }
    Ok(())
}
