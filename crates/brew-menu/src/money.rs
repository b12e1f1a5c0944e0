//! Money values for price labels.
//!
//! The engine itself only produces integer totals. Labels pair an amount with
//! the currency code supplied by the chain configuration so presentation code
//! gets a ready string without reimplementing the rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency code as delivered by the chain (e.g. "RUB").
///
/// Codes are opaque: the menu service decides which ones exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a currency from its ISO alpha-3 code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// An amount in whole menu units with an optional currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in menu units.
    pub amount: i64,
    /// Currency, if the chain has reported one yet.
    pub currency: Option<Currency>,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Option<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount.
    pub fn zero(currency: Option<Currency>) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Format as a total label (e.g., "RUB 350"), or the bare amount
    /// while no currency is known.
    pub fn label(&self) -> String {
        match &self.currency {
            Some(currency) => format!("{} {}", currency, self.amount),
            None => self.amount.to_string(),
        }
    }

    /// Format as an add-on label: "+RUB 50" for a surcharge, "RUB 0" otherwise.
    pub fn surcharge_label(&self) -> String {
        if self.is_positive() {
            format!("+{}", self.label())
        } else {
            Money::zero(self.currency.clone()).label()
        }
    }
}
