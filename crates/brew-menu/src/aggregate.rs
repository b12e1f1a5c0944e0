//! Aggregation of price and nutrition over a selection.
//!
//! Totals are always recomputed from scratch: the active product's base
//! values plus the active variation of every selected ingredient.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::catalog::{Product, QuantityVariation};
use crate::ids::IngredientId;
use crate::nutrition::NutritionFacts;
use serde::{Deserialize, Serialize};

/// Base values of the active product before customization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductBase {
    pub price: i64,
    /// `None` when the menu reports no nutrition for the product.
    pub nutrition: Option<NutritionFacts>,
}

impl From<&Product> for ProductBase {
    fn from(product: &Product) -> Self {
        Self {
            price: product.base_price(),
            nutrition: product.base_nutrition(),
        }
    }
}

/// Derived totals of a customized product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Base price plus every selected variation's price.
    pub price: i64,
    /// Base nutrition combined with every selected variation's nutrition.
    /// `None` when the product itself reports no nutrition.
    pub nutrition: Option<NutritionFacts>,
}

/// Compute totals for `base` and a selection map.
pub fn project(base: &ProductBase, selected: &BTreeMap<IngredientId, QuantityVariation>) -> Totals {
    let price = base.price + selected.values().map(|v| v.price).sum::<i64>();
    let nutrition = base.nutrition.as_ref().map(|own| {
        NutritionFacts::fold(std::iter::once(own).chain(selected.values().map(|v| &v.food_value)))
    });

    Totals { price, nutrition }
}

/// Publishes totals whenever its inputs change.
#[derive(Debug)]
pub struct Projector {
    totals: watch::Sender<Totals>,
}

impl Projector {
    pub fn new() -> Self {
        let (totals, _) = watch::channel(Totals::default());
        Self { totals }
    }

    /// Subscribe to totals.
    pub fn subscribe(&self) -> watch::Receiver<Totals> {
        self.totals.subscribe()
    }

    /// The last computed totals.
    pub fn totals(&self) -> Totals {
        *self.totals.borrow()
    }

    /// Recompute totals from fresh inputs and publish them if they changed.
    pub fn update(
        &mut self,
        base: &ProductBase,
        selected: &BTreeMap<IngredientId, QuantityVariation>,
    ) -> Totals {
        let next = project(base, selected);
        self.totals.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        tracing::trace!(price = next.price, "totals projected");
        next
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}
