//! Product customization engine for the Brew ordering app.
//!
//! This crate turns a product's catalog composition and a stream of buyer
//! events into an always-valid selection and its derived totals:
//!
//! - **Catalog**: Menu items, size variants, composition groups, ingredients
//! - **Customize**: Selection state and the resolver enforcing choice policies
//! - **Aggregate**: Total price and nutrition derived from a selection
//! - **Session**: One menu item's customization, wiring the above together
//!
//! # Example
//!
//! ```rust
//! use brew_menu::prelude::*;
//!
//! let milk = CompositionGroup::new("milk", "Milk", ChoicePolicy::Single)
//!     .with_ingredient(
//!         Ingredient::new("cow", "Cow").with_variation(QuantityVariation::new("Standard", 1, 0)),
//!     )
//!     .with_ingredient(
//!         Ingredient::new("oat", "Oat").with_variation(QuantityVariation::new("Standard", 1, 50)),
//!     );
//! let latte = Product::new("latte-m", "Latte", 300).with_group(milk);
//!
//! let mut session =
//!     CustomizationSession::new(vec![latte], &ProductId::new("latte-m"), CustomizeConfig::default())
//!         .unwrap();
//! assert_eq!(session.totals().price, 300);
//!
//! let totals = session.toggle_ingredient(&GroupCode::new("milk"), &IngredientId::new("oat"));
//! assert_eq!(totals.price, 350);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod nutrition;

pub mod catalog;
pub mod customize;
pub mod session;

pub use error::MenuError;
pub use ids::*;
pub use money::{Currency, Money};
pub use nutrition::NutritionFacts;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MenuError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::nutrition::NutritionFacts;

    // Catalog
    pub use crate::catalog::{
        ChoicePolicy, Composition, CompositionGroup, Ingredient, Menu, MenuItem, PriceLevel,
        Product, QuantityVariation,
    };

    // Customization
    pub use crate::config::CustomizeConfig;
    pub use crate::customize::{
        GroupState, Resolver, SelectableTier, SelectedIngredient, Selection, SelectionEvent,
    };

    // Aggregation
    pub use crate::aggregate::{project, ProductBase, Projector, Totals};

    // Session
    pub use crate::session::{CustomizationSession, SessionEvent};
}
