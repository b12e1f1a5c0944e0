//! Selection events and their pure application.
//!
//! Every function here takes the current snapshot and returns the next one.
//! Events that name an unknown group, ingredient or tier are stale UI events
//! and return the snapshot unchanged.

use std::collections::BTreeMap;

use crate::catalog::CompositionGroup;
use crate::config::CustomizeConfig;
use crate::customize::tiers::{collect_tiers, members_at};
use crate::customize::validity::build_valid_group_state;
use crate::customize::{GroupState, Selection};
use crate::ids::{GroupCode, IngredientId};
use serde::{Deserialize, Serialize};

/// Discrete events accepted by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// A new product became active; its groups replace the current state.
    SetActiveProduct { groups: Vec<CompositionGroup> },
    /// The buyer focused a group.
    SelectGroup { group: GroupCode },
    /// The buyer tapped an ingredient.
    ToggleIngredient {
        group: GroupCode,
        ingredient: IngredientId,
    },
    /// The buyer picked a quantity tier for a group.
    SelectTier { group: GroupCode, quantity: i64 },
}

/// Apply one event to `selection`.
pub fn apply(selection: &Selection, event: &SelectionEvent, config: &CustomizeConfig) -> Selection {
    match event {
        SelectionEvent::SetActiveProduct { groups } => set_active_product(selection, groups, config),
        SelectionEvent::SelectGroup { group } => select_group(selection, group),
        SelectionEvent::ToggleIngredient { group, ingredient } => {
            toggle_ingredient(selection, group, ingredient)
        }
        SelectionEvent::SelectTier { group, quantity } => select_tier(selection, group, *quantity),
    }
}

/// Rebuild the whole state for a new product's groups.
///
/// When enabled, selections from `previous` carry over by ingredient id and
/// pick the tier they were made at. Groups with no usable tier are dropped.
pub fn set_active_product(
    previous: &Selection,
    groups: &[CompositionGroup],
    config: &CustomizeConfig,
) -> Selection {
    let carried: BTreeMap<IngredientId, i64> = if config.carry_forward_selection {
        previous
            .selected_ingredients()
            .into_iter()
            .map(|(id, variation)| (id, variation.quantity))
            .collect()
    } else {
        BTreeMap::new()
    };

    let focused = if config.keep_focus {
        previous.focused_group().map(|g| g.code().clone())
    } else {
        None
    };

    let groups = groups
        .iter()
        .filter_map(|group| initial_group_state(group, &carried, focused.as_ref()))
        .map(|state| build_valid_group_state(state, None))
        .collect();

    Selection { groups }
}

fn initial_group_state(
    group: &CompositionGroup,
    carried: &BTreeMap<IngredientId, i64>,
    focused: Option<&GroupCode>,
) -> Option<GroupState> {
    let mut tiers = collect_tiers(group);
    if tiers.is_empty() {
        tracing::debug!(group = %group.code, "dropping group without usable tiers");
        return None;
    }

    let carried_quantities: Vec<i64> = group
        .ingredients
        .iter()
        .filter_map(|i| carried.get(&i.id).copied())
        .collect();

    let index = tiers
        .iter()
        .position(|t| carried_quantities.contains(&t.quantity))
        .unwrap_or(0);
    tiers[index].is_selected = true;
    let quantity = tiers[index].quantity;

    Some(GroupState {
        members: members_at(group, quantity, |id| carried.contains_key(id)),
        tiers,
        is_focused: focused == Some(&group.code),
        group: group.clone(),
    })
}

/// Focus `code` and unfocus every other group.
pub fn select_group(selection: &Selection, code: &GroupCode) -> Selection {
    if selection.group(code).is_none() {
        tracing::debug!(group = %code, "ignoring focus on unknown group");
        return selection.clone();
    }

    let mut next = selection.clone();
    for state in &mut next.groups {
        state.is_focused = state.code() == code;
    }
    next
}

/// Flip an ingredient's selection, then re-validate its group with the
/// ingredient as the most recently touched one.
pub fn toggle_ingredient(selection: &Selection, code: &GroupCode, ingredient: &IngredientId) -> Selection {
    let Some(group_index) = selection.groups.iter().position(|g| g.code() == code) else {
        tracing::debug!(group = %code, "ignoring toggle in unknown group");
        return selection.clone();
    };
    let Some(member_index) = selection.groups[group_index]
        .members
        .iter()
        .position(|m| m.id() == ingredient)
    else {
        tracing::debug!(group = %code, ingredient = %ingredient, "ignoring toggle of non-member");
        return selection.clone();
    };

    let mut next = selection.clone();
    let mut state = next.groups[group_index].clone();
    state.members[member_index].is_selected = !state.members[member_index].is_selected;
    next.groups[group_index] = build_valid_group_state(state, Some(ingredient));
    next
}

/// Switch a group to the tier at `quantity`.
///
/// Membership is rebuilt from the catalog group at the new tier. Members
/// that lack the tier are dropped together with their selection; surviving
/// members keep theirs. The group is then re-validated since a higher tier
/// can push a `Multi` group over its cap or drop a `Single` group's choice.
pub fn select_tier(selection: &Selection, code: &GroupCode, quantity: i64) -> Selection {
    let Some(group_index) = selection.groups.iter().position(|g| g.code() == code) else {
        tracing::debug!(group = %code, "ignoring tier change in unknown group");
        return selection.clone();
    };
    let current = &selection.groups[group_index];
    if !current.tiers.iter().any(|t| t.quantity == quantity) {
        tracing::debug!(group = %code, quantity, "ignoring unknown tier");
        return selection.clone();
    }

    let tiers = current
        .tiers
        .iter()
        .map(|t| {
            let mut tier = t.clone();
            tier.is_selected = t.quantity == quantity;
            tier
        })
        .collect();
    let members = members_at(&current.group, quantity, |id| {
        current.member(id).map(|m| m.is_selected).unwrap_or(false)
    });

    let state = GroupState {
        group: current.group.clone(),
        tiers,
        members,
        is_focused: current.is_focused,
    };

    let mut next = selection.clone();
    next.groups[group_index] = build_valid_group_state(state, None);
    next
}
