//! Packing options and their YAML form.
//!
//! Every field is optional in YAML; missing fields take their defaults.
//!
//! ```yaml
//! black_brightness: 0.6
//! white_brightness: 1.0
//! filter: lanczos3
//! ```

use crate::luma::Brightness;
use crate::resample::Filter;
use crate::{OpsError, OpsResult};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parameters of a pack operation.
///
/// # Example
///
/// ```rust
/// use dualpng_ops::{Filter, PackOptions};
///
/// let opts = PackOptions::default().with_filter(Filter::Nearest);
/// assert_eq!(opts.black_brightness.get(), 0.5);
/// assert_eq!(opts.filter, Filter::Nearest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackOptions {
    /// Multiplier for the image revealed over black.
    pub black_brightness: Brightness,
    /// Multiplier for the image revealed over white.
    pub white_brightness: Brightness,
    /// Filter used to fit each source onto the output grid.
    pub filter: Filter,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            black_brightness: Brightness::BLACK_DEFAULT,
            white_brightness: Brightness::WHITE_DEFAULT,
            filter: Filter::default(),
        }
    }
}

impl PackOptions {
    /// Sets the black-input brightness.
    pub fn with_black_brightness(mut self, brightness: Brightness) -> Self {
        self.black_brightness = brightness;
        self
    }

    /// Sets the white-input brightness.
    pub fn with_white_brightness(mut self, brightness: Brightness) -> Self {
        self.white_brightness = brightness;
        self
    }

    /// Sets the resampling filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Parses options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| OpsError::Config(e.to_string()))
    }

    /// Loads options from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| OpsError::Config(format!("cannot read {}: {e}", path.display())))?;
        let opts = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), ?opts, "loaded pack options");
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let opts = PackOptions::from_yaml_str(
            "black_brightness: 0.75\nwhite_brightness: 1.5\nfilter: bicubic\n",
        )
        .unwrap();
        assert_eq!(opts.black_brightness.get(), 0.75);
        assert_eq!(opts.white_brightness.get(), 1.5);
        assert_eq!(opts.filter, Filter::Bicubic);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let opts = PackOptions::from_yaml_str("filter: nearest").unwrap();
        assert_eq!(opts.black_brightness, Brightness::BLACK_DEFAULT);
        assert_eq!(opts.white_brightness, Brightness::WHITE_DEFAULT);
        assert_eq!(opts.filter, Filter::Nearest);
    }

    #[test]
    fn test_negative_brightness_rejected() {
        let err = PackOptions::from_yaml_str("black_brightness: -1").unwrap_err();
        assert!(matches!(err, OpsError::Config(ref m) if m.contains("brightness")), "{err}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(PackOptions::from_yaml_str("gamma: 2.2").is_err());
        assert!(PackOptions::from_yaml_str("filter: box").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack.yaml");
        std::fs::write(&path, "white_brightness: 0.9\n").unwrap();
        assert_eq!(PackOptions::from_file(&path).unwrap().white_brightness.get(), 0.9);

        let missing = PackOptions::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, OpsError::Config(_)));
    }
}
