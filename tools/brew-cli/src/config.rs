//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use brew_menu::config::CustomizeConfig;
use serde::{Deserialize, Serialize};

/// Names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 2] = ["brew.toml", ".brew.toml"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrewConfig {
    /// Resolver behaviour and default currency.
    #[serde(default)]
    pub customize: CustomizeConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl BrewConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print nutrition totals next to prices.
    #[serde(default = "default_true")]
    pub nutrition: bool,

    /// Print every group member, not only selected ones.
    #[serde(default = "default_true")]
    pub show_unselected: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            nutrition: true,
            show_unselected: true,
        }
    }
}

/// Generate a default brew.toml config file.
pub fn generate_default_config() -> String {
    r#"# Brew customization harness configuration

[customize]
# Keep matching selections when switching between sizes.
carry_forward_selection = true
# Keep the focused group when switching between sizes.
keep_focus = true
# currency = "RUB"

[output]
nutrition = true
show_unselected = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_parses() {
        let config = BrewConfig::parse(&generate_default_config()).unwrap();
        assert!(config.customize.carry_forward_selection);
        assert!(config.customize.keep_focus);
        assert_eq!(config.customize.currency, None);
        assert!(config.output.nutrition);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = BrewConfig::parse("[customize]\ncurrency = \"usd\"\n").unwrap();
        assert_eq!(config.customize.currency.as_deref(), Some("usd"));
        assert!(config.customize.carry_forward_selection);
        assert!(config.output.show_unselected);
    }

    #[test]
    fn test_output_section_overrides() {
        let config = BrewConfig::parse("[output]\nnutrition = false\n").unwrap();
        assert!(!config.output.nutrition);
        assert!(config.output.show_unselected);
    }
}
