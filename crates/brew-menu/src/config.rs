//! Customization settings.

use std::path::Path;

use crate::error::MenuError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Settings governing how a customization session behaves.
///
/// Usually read from the `[customize]` table of `brew.toml`:
///
/// ```toml
/// carry_forward_selection = true
/// keep_focus = true
/// currency = "RUB"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizeConfig {
    /// Carry selections over to the next product when the buyer switches size.
    pub carry_forward_selection: bool,

    /// Re-focus the group with the same code after a product switch.
    pub keep_focus: bool,

    /// Currency used for labels until the chain reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Default for CustomizeConfig {
    fn default() -> Self {
        Self {
            carry_forward_selection: true,
            keep_focus: true,
            currency: None,
        }
    }
}

impl CustomizeConfig {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, MenuError> {
        Ok(toml::from_str(content)?)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The configured default currency, if any.
    pub fn default_currency(&self) -> Option<Currency> {
        self.currency.as_deref().map(Currency::new)
    }
}
