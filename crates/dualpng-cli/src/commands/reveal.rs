//! Reveal command
//!
//! Previews a packed image by compositing it over a solid background.

use crate::RevealArgs;
use anyhow::Result;
use dualpng_ops::{reveal, Background};

pub fn run(args: RevealArgs, verbose: u8) -> Result<()> {
    let background: Background = args.background.parse()?;
    let packed = super::load_image(&args.input)?;

    let preview = reveal(&packed, background)?;
    super::save_image(&args.output, &preview)?;

    if verbose > 0 {
        println!("{} over {} -> {}", args.input.display(), background, args.output.display());
    }
    Ok(())
}
