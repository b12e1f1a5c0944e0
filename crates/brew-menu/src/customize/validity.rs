//! Per-policy validity pass over a group's selection.

use crate::catalog::ChoicePolicy;
use crate::customize::GroupState;
use crate::ids::IngredientId;

/// Bring a group's selection in line with its choice policy.
///
/// `touched` is the ingredient the buyer just toggled, if any. It is never
/// deselected to make room for others.
pub fn build_valid_group_state(mut state: GroupState, touched: Option<&IngredientId>) -> GroupState {
    match state.policy() {
        ChoicePolicy::None => {
            for member in &mut state.members {
                member.is_selected = false;
            }
        }
        ChoicePolicy::Multi => enforce_quantity_cap(&mut state, touched),
        ChoicePolicy::Single => enforce_single_choice(&mut state, touched),
    }
    state
}

/// Deselect the earliest untouched selected members until the group fits
/// its maximum. Runs at most once per member.
fn enforce_quantity_cap(state: &mut GroupState, touched: Option<&IngredientId>) {
    let max = state.group.max_total_quantity;

    for _ in 0..state.members.len() {
        if state.selected_quantity() <= max {
            return;
        }

        let candidate = state
            .members
            .iter()
            .position(|m| m.is_selected && Some(m.id()) != touched);

        match candidate {
            Some(index) => {
                tracing::debug!(
                    group = %state.group.code,
                    ingredient = %state.members[index].id(),
                    "deselecting to respect quantity cap"
                );
                state.members[index].is_selected = false;
            }
            None => break,
        }
    }

    if state.selected_quantity() > max {
        tracing::warn!(
            group = %state.group.code,
            selected = state.selected_quantity(),
            max,
            "group left over capacity, no member can be deselected"
        );
    }
}

/// Leave exactly one member selected: the touched one, else the first
/// already selected, else the first member.
fn enforce_single_choice(state: &mut GroupState, touched: Option<&IngredientId>) {
    if state.members.is_empty() {
        return;
    }

    let keep = touched
        .and_then(|id| state.members.iter().position(|m| m.id() == id))
        .or_else(|| state.members.iter().position(|m| m.is_selected))
        .unwrap_or(0);

    for (index, member) in state.members.iter_mut().enumerate() {
        member.is_selected = index == keep;
    }
}
