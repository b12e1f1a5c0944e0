//! Selection state snapshots.

use std::collections::BTreeMap;

use crate::catalog::{ChoicePolicy, CompositionGroup, Ingredient, QuantityVariation};
use crate::ids::{GroupCode, IngredientId};
use serde::{Deserialize, Serialize};

/// A quantity tier shared by every member of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableTier {
    /// Tier display name, taken from the first variation seen at this quantity.
    pub name: String,
    /// Tier quantity.
    pub quantity: i64,
    /// Whether this tier is active for the group.
    pub is_selected: bool,
}

/// A group member at the group's active tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedIngredient {
    pub ingredient: Ingredient,
    /// The ingredient's variation at the group's active tier.
    pub active_variation: QuantityVariation,
    pub is_selected: bool,
    pub is_available: bool,
}

impl SelectedIngredient {
    pub fn id(&self) -> &IngredientId {
        &self.ingredient.id
    }
}

/// Selection state of one composition group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupState {
    /// Catalog group this state was derived from.
    pub group: CompositionGroup,
    /// Distinct tiers offered by the group, exactly one selected.
    pub tiers: Vec<SelectableTier>,
    /// Ingredients offering a variation at the selected tier.
    pub members: Vec<SelectedIngredient>,
    /// Whether the buyer is currently looking at this group.
    pub is_focused: bool,
}

impl GroupState {
    pub fn code(&self) -> &GroupCode {
        &self.group.code
    }

    pub fn policy(&self) -> ChoicePolicy {
        self.group.choice_policy
    }

    /// Get a member by ingredient id.
    pub fn member(&self, id: &IngredientId) -> Option<&SelectedIngredient> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Members currently selected, in list order.
    pub fn selected_members(&self) -> impl Iterator<Item = &SelectedIngredient> {
        self.members.iter().filter(|m| m.is_selected)
    }

    /// The active tier.
    pub fn selected_tier(&self) -> Option<&SelectableTier> {
        self.tiers.iter().find(|t| t.is_selected)
    }

    /// Sum of the active tier quantities of selected members.
    pub fn selected_quantity(&self) -> i64 {
        self.selected_members()
            .map(|m| m.active_variation.quantity)
            .sum()
    }

    /// Sum of the active prices of selected members.
    pub fn selected_price(&self) -> i64 {
        self.selected_members().map(|m| m.active_variation.price).sum()
    }

    /// Group header title: the chosen ingredient when exactly one is
    /// selected, the group name otherwise.
    pub fn title(&self) -> &str {
        let mut selected = self.selected_members();
        match (selected.next(), selected.next()) {
            (Some(only), None) => &only.ingredient.name,
            _ => &self.group.name,
        }
    }
}

/// Snapshot of every group's selection state for the active product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub groups: Vec<GroupState>,
}

impl Selection {
    /// Get a group by code.
    pub fn group(&self, code: &GroupCode) -> Option<&GroupState> {
        self.groups.iter().find(|g| g.code() == code)
    }

    /// The group the buyer is looking at, if any.
    pub fn focused_group(&self) -> Option<&GroupState> {
        self.groups.iter().find(|g| g.is_focused)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every selected ingredient with its active variation.
    ///
    /// This is the only view the aggregation step reads.
    pub fn selected_ingredients(&self) -> BTreeMap<IngredientId, QuantityVariation> {
        self.groups
            .iter()
            .flat_map(|g| g.selected_members())
            .map(|m| (m.id().clone(), m.active_variation.clone()))
            .collect()
    }
}
