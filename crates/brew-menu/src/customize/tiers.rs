//! Tier and membership derivation from catalog groups.

use crate::catalog::CompositionGroup;
use crate::customize::{SelectableTier, SelectedIngredient};
use crate::ids::IngredientId;

/// Collect the distinct tiers a group offers, in first-seen order.
///
/// Variations are de-duplicated by quantity across all member ingredients.
/// Zero-quantity tiers are never presentable choices, so a group whose
/// ingredients only offer quantity zero yields no tiers at all.
pub fn collect_tiers(group: &CompositionGroup) -> Vec<SelectableTier> {
    let mut tiers: Vec<SelectableTier> = Vec::new();

    for variation in group.ingredients.iter().flat_map(|i| &i.quantity_variations) {
        if variation.quantity == 0 || tiers.iter().any(|t| t.quantity == variation.quantity) {
            continue;
        }
        tiers.push(SelectableTier {
            name: variation.name.clone(),
            quantity: variation.quantity,
            is_selected: false,
        });
    }

    tiers
}

/// Build the member list of `group` at tier `quantity`.
///
/// Ingredients without a variation at that quantity are left out. Selection
/// marks come from `was_selected`.
pub fn members_at(
    group: &CompositionGroup,
    quantity: i64,
    was_selected: impl Fn(&IngredientId) -> bool,
) -> Vec<SelectedIngredient> {
    group
        .ingredients
        .iter()
        .filter_map(|ingredient| {
            let variation = ingredient.variation_at(quantity)?;
            Some(SelectedIngredient {
                ingredient: ingredient.clone(),
                active_variation: variation.clone(),
                is_selected: was_selected(&ingredient.id),
                is_available: true,
            })
        })
        .collect()
}
