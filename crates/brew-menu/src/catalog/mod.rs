//! Product catalog module.
//!
//! Immutable catalog data: menu items, their size variants, composition
//! groups, ingredients and quantity variations.

mod group;
mod ingredient;
mod menu;
mod product;

pub use group::{ChoicePolicy, CompositionGroup};
pub use ingredient::{Ingredient, QuantityVariation};
pub use menu::{Menu, MenuItem};
pub use product::{Composition, PriceLevel, Product};
