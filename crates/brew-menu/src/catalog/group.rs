//! Composition groups and choice policies.

use crate::catalog::Ingredient;
use crate::ids::GroupCode;
use serde::{Deserialize, Serialize};

/// How many members of a group the buyer may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChoicePolicy {
    /// Informational group, nothing is selectable.
    #[default]
    None,
    /// Exactly one member is selected at all times.
    Single,
    /// Any subset whose total tier quantity stays within the group maximum.
    Multi,
}

impl ChoicePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoicePolicy::None => "none",
            ChoicePolicy::Single => "single",
            ChoicePolicy::Multi => "multi",
        }
    }
}

/// A group of interchangeable ingredients (e.g. "Milk", "Syrups").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionGroup {
    /// Group code, unique within a product.
    pub code: GroupCode,
    /// Display name.
    pub name: String,
    /// Selection cardinality rule.
    #[serde(rename = "choiceType")]
    pub choice_policy: ChoicePolicy,
    /// Minimum total quantity reported by the menu.
    #[serde(rename = "totalQuantityMin", default)]
    pub min_total_quantity: i64,
    /// Maximum total tier quantity of selected members (`Multi` only).
    #[serde(rename = "totalQuantityMax", default)]
    pub max_total_quantity: i64,
    /// Member ingredients in display order.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl CompositionGroup {
    /// Create an empty group.
    pub fn new(code: impl Into<GroupCode>, name: impl Into<String>, policy: ChoicePolicy) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            choice_policy: policy,
            min_total_quantity: 0,
            max_total_quantity: 0,
            ingredients: Vec::new(),
        }
    }

    /// Set the maximum total quantity.
    pub fn with_max_total_quantity(mut self, max: i64) -> Self {
        self.max_total_quantity = max;
        self
    }

    /// Add a member ingredient.
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}
