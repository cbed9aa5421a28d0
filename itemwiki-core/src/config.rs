//! Extractor configuration.
//!
//! Supports TOML configuration files like:
//! ```toml
//! default_tier = 3
//! include_auras = true
//! ornn_marker = "ORNN"
//!
//! [[slug_corrections]]
//! from = "Ruby_Crystal_Ruby_Crystal"
//! to = "Ruby_Crystal"
//! ```
//! Every key is optional.

use crate::error::{ItemWikiError, Result};
use crate::recipe::{default_slug_corrections, SlugCorrection};
use serde::Deserialize;
use std::path::Path;

fn default_tier() -> Option<u32> {
    Some(3)
}

fn default_include_auras() -> bool {
    true
}

fn default_ornn_marker() -> String {
    "ORNN".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Tier assigned when the `tier` field is absent.
    #[serde(default = "default_tier")]
    pub default_tier: Option<u32>,

    /// Append aura descriptors to the passive list.
    #[serde(default = "default_include_auras")]
    pub include_auras: bool,

    /// Token in the `limit` field marking an Ornn upgrade (case-insensitive).
    #[serde(default = "default_ornn_marker")]
    pub ornn_marker: String,

    #[serde(default = "default_slug_corrections")]
    pub slug_corrections: Vec<SlugCorrection>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            default_tier: default_tier(),
            include_auras: default_include_auras(),
            ornn_marker: default_ornn_marker(),
            slug_corrections: default_slug_corrections(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ItemWikiError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read extractor config from {:?}: {}", path, e),
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ItemWikiError::Config(format!("Failed to parse extractor config TOML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ExtractorConfig::from_str("").unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(config.default_tier, Some(3));
        assert!(config.include_auras);
        assert_eq!(config.slug_corrections.len(), 3);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
default_tier = 2
include_auras = false
ornn_marker = "Masterwork"

[[slug_corrections]]
from = "Doran_Blade"
to = "Doran's_Blade"
"#;

        let config = ExtractorConfig::from_str(toml).unwrap();
        assert_eq!(config.default_tier, Some(2));
        assert!(!config.include_auras);
        assert_eq!(config.ornn_marker, "Masterwork");
        assert_eq!(
            config.slug_corrections,
            vec![SlugCorrection::new("Doran_Blade", "Doran's_Blade")]
        );
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let result = ExtractorConfig::from_str("default_teir = 2");
        assert!(matches!(result, Err(ItemWikiError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itemwiki.toml");
        std::fs::write(&path, "default_tier = 4\n").unwrap();

        let config = ExtractorConfig::from_file(&path).unwrap();
        assert_eq!(config.default_tier, Some(4));

        let missing = ExtractorConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ItemWikiError::Io(_))));
    }
}
