//! Stateful composition resolver.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::catalog::{CompositionGroup, QuantityVariation};
use crate::config::CustomizeConfig;
use crate::customize::events::{self, SelectionEvent};
use crate::customize::Selection;
use crate::ids::{GroupCode, IngredientId};

/// Owns the selection state of one customization session.
///
/// Events are applied in call order by a single writer. Each one returns the
/// new snapshot and publishes it to subscribers when it differs from the
/// previous one. Publishing never blocks and needs no async runtime.
#[derive(Debug)]
pub struct Resolver {
    config: CustomizeConfig,
    state: watch::Sender<Selection>,
}

impl Resolver {
    /// Create a resolver with no active product.
    pub fn new(config: CustomizeConfig) -> Self {
        let (state, _) = watch::channel(Selection::default());
        Self { config, state }
    }

    /// Subscribe to selection snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.state.subscribe()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Selection {
        self.state.borrow().clone()
    }

    /// Selected ingredients with their active variations.
    pub fn selected_ingredients(&self) -> BTreeMap<IngredientId, QuantityVariation> {
        self.state.borrow().selected_ingredients()
    }

    /// Apply any event.
    pub fn apply(&mut self, event: &SelectionEvent) -> Selection {
        let next = events::apply(&self.state.borrow(), event, &self.config);
        self.publish(next)
    }

    /// Replace the state with the groups of a newly active product.
    pub fn set_active_product(&mut self, groups: &[CompositionGroup]) -> Selection {
        tracing::debug!(groups = groups.len(), "activating product composition");
        let next = events::set_active_product(&self.state.borrow(), groups, &self.config);
        self.publish(next)
    }

    /// Focus a group.
    pub fn select_group(&mut self, group: &GroupCode) -> Selection {
        tracing::debug!(group = %group, "focusing group");
        let next = events::select_group(&self.state.borrow(), group);
        self.publish(next)
    }

    /// Toggle an ingredient within a group.
    pub fn toggle_ingredient(&mut self, group: &GroupCode, ingredient: &IngredientId) -> Selection {
        tracing::debug!(group = %group, ingredient = %ingredient, "toggling ingredient");
        let next = events::toggle_ingredient(&self.state.borrow(), group, ingredient);
        self.publish(next)
    }

    /// Switch a group's tier.
    pub fn select_tier(&mut self, group: &GroupCode, quantity: i64) -> Selection {
        tracing::debug!(group = %group, quantity, "selecting tier");
        let next = events::select_tier(&self.state.borrow(), group, quantity);
        self.publish(next)
    }

    /// Switch the tier of whichever group is focused. No-op without focus.
    pub fn select_focused_tier(&mut self, quantity: i64) -> Selection {
        let focused = self.state.borrow().focused_group().map(|g| g.code().clone());
        match focused {
            Some(group) => self.select_tier(&group, quantity),
            None => self.snapshot(),
        }
    }

    fn publish(&self, next: Selection) -> Selection {
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next.clone();
            true
        });
        tracing::trace!(changed, "selection published");
        next
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(CustomizeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ChoicePolicy, Ingredient};

    fn groups() -> Vec<CompositionGroup> {
        vec![CompositionGroup::new("milk", "Milk", ChoicePolicy::Single)
            .with_ingredient(
                Ingredient::new("cow", "Cow").with_variation(QuantityVariation::new("Standard", 1, 0)),
            )
            .with_ingredient(
                Ingredient::new("oat", "Oat").with_variation(QuantityVariation::new("Standard", 1, 60)),
            )]
    }

    #[test]
    fn test_resolver_publishes_changes() {
        let mut resolver = Resolver::default();
        let mut rx = resolver.subscribe();
        assert!(!rx.has_changed().unwrap());

        resolver.set_active_product(&groups());
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot, resolver.snapshot());

        resolver.toggle_ingredient(&GroupCode::new("milk"), &IngredientId::new("oat"));
        assert!(rx.has_changed().unwrap());
        let selected = rx.borrow_and_update().selected_ingredients();
        assert_eq!(selected[&IngredientId::new("oat")].price, 60);
    }

    #[test]
    fn test_resolver_skips_unchanged_snapshots() {
        let mut resolver = Resolver::default();
        resolver.set_active_product(&groups());
        let rx = resolver.subscribe();

        resolver.toggle_ingredient(&GroupCode::new("ice"), &IngredientId::new("cubes"));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_select_focused_tier_requires_focus() {
        let mut resolver = Resolver::default();
        resolver.set_active_product(&groups());
        let before = resolver.snapshot();
        assert_eq!(resolver.select_focused_tier(1), before);

        resolver.select_group(&GroupCode::new("milk"));
        let after = resolver.select_focused_tier(1);
        assert!(after.group(&GroupCode::new("milk")).unwrap().is_focused);
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut resolver = Resolver::default();
        resolver.apply(&SelectionEvent::SetActiveProduct { groups: groups() });
        let snapshot = resolver.apply(&SelectionEvent::ToggleIngredient {
            group: GroupCode::new("milk"),
            ingredient: IngredientId::new("oat"),
        });
        assert_eq!(snapshot.group(&GroupCode::new("milk")).unwrap().title(), "Oat");
    }
}
