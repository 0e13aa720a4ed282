//! CLI command implementations

pub mod info;
pub mod pack;
pub mod reveal;

use anyhow::{Context, Result};
use dualpng_core::Raster;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Raster> {
    dualpng_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path as PNG
pub fn save_image(path: &Path, image: &Raster) -> Result<()> {
    dualpng_io::write_png(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
