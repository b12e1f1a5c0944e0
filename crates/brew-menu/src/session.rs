//! Customization session for one menu item.
//!
//! A session owns the size variants of a menu item, the resolver holding the
//! buyer's selection, and the projector deriving totals. Every event updates
//! the selection first and then recomputes totals from the active product's
//! base values and the new selection.

use tokio::sync::watch;

use crate::aggregate::{ProductBase, Projector, Totals};
use crate::catalog::{Menu, Product};
use crate::config::CustomizeConfig;
use crate::customize::{Resolver, Selection};
use crate::error::MenuError;
use crate::ids::{GroupCode, IngredientId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Events a presentation layer sends into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Switch to another size variant.
    SelectProduct { product: ProductId },
    /// Focus a group.
    SelectGroup { group: GroupCode },
    /// Toggle an ingredient.
    ToggleIngredient {
        group: GroupCode,
        ingredient: IngredientId,
    },
    /// Switch a tier; without a group the focused group is used.
    SelectTier {
        #[serde(default)]
        group: Option<GroupCode>,
        quantity: i64,
    },
    /// The chain reported its currency.
    SetCurrency { currency: Option<Currency> },
}

/// Customization session state.
#[derive(Debug)]
pub struct CustomizationSession {
    products: Vec<Product>,
    active: usize,
    currency: Option<Currency>,
    resolver: Resolver,
    projector: Projector,
}

impl CustomizationSession {
    /// Open a session over `products` with `selected` active.
    pub fn new(
        products: Vec<Product>,
        selected: &ProductId,
        config: CustomizeConfig,
    ) -> Result<Self, MenuError> {
        if products.is_empty() {
            return Err(MenuError::NoProducts);
        }
        let active = products
            .iter()
            .position(|p| &p.id == selected)
            .ok_or_else(|| MenuError::ProductNotFound(selected.to_string()))?;

        let mut session = Self {
            products,
            active,
            currency: config.default_currency(),
            resolver: Resolver::new(config),
            projector: Projector::new(),
        };
        session.activate(active);
        Ok(session)
    }

    /// Open a session for a product on `menu`, offering its sibling sizes.
    pub fn from_menu(
        menu: &Menu,
        product: &ProductId,
        config: CustomizeConfig,
    ) -> Result<Self, MenuError> {
        let (item, _) = menu
            .find_product(product)
            .ok_or_else(|| MenuError::ProductNotFound(product.to_string()))?;
        Self::new(item.products.clone(), product, config)
    }

    /// Size variants offered in this session.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active size variant.
    pub fn active_product(&self) -> &Product {
        &self.products[self.active]
    }

    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    /// Current selection snapshot.
    pub fn selection(&self) -> Selection {
        self.resolver.snapshot()
    }

    /// Current totals.
    pub fn totals(&self) -> Totals {
        self.projector.totals()
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<Selection> {
        self.resolver.subscribe()
    }

    pub fn subscribe_totals(&self) -> watch::Receiver<Totals> {
        self.projector.subscribe()
    }

    /// Switch to another size variant. Unknown ids are ignored.
    pub fn select_product(&mut self, product: &ProductId) -> Totals {
        match self.products.iter().position(|p| &p.id == product) {
            Some(index) => self.activate(index),
            None => {
                tracing::debug!(product = %product, "ignoring unknown product");
                self.totals()
            }
        }
    }

    pub fn select_group(&mut self, group: &GroupCode) -> Totals {
        self.resolver.select_group(group);
        self.refresh()
    }

    pub fn toggle_ingredient(&mut self, group: &GroupCode, ingredient: &IngredientId) -> Totals {
        self.resolver.toggle_ingredient(group, ingredient);
        self.refresh()
    }

    pub fn select_tier(&mut self, group: &GroupCode, quantity: i64) -> Totals {
        self.resolver.select_tier(group, quantity);
        self.refresh()
    }

    /// Switch the focused group's tier.
    pub fn select_focused_tier(&mut self, quantity: i64) -> Totals {
        self.resolver.select_focused_tier(quantity);
        self.refresh()
    }

    /// Record the chain's currency. Only labels change.
    pub fn set_currency(&mut self, currency: Option<Currency>) {
        self.currency = currency;
    }

    /// Apply a session event and return the resulting totals.
    pub fn apply(&mut self, event: &SessionEvent) -> Totals {
        match event {
            SessionEvent::SelectProduct { product } => self.select_product(product),
            SessionEvent::SelectGroup { group } => self.select_group(group),
            SessionEvent::ToggleIngredient { group, ingredient } => {
                self.toggle_ingredient(group, ingredient)
            }
            SessionEvent::SelectTier {
                group: Some(group),
                quantity,
            } => self.select_tier(group, *quantity),
            SessionEvent::SelectTier {
                group: None,
                quantity,
            } => self.select_focused_tier(*quantity),
            SessionEvent::SetCurrency { currency } => {
                self.set_currency(currency.clone());
                self.totals()
            }
        }
    }

    /// Total price label, e.g. "RUB 350".
    pub fn price_label(&self) -> String {
        Money::new(self.totals().price, self.currency.clone()).label()
    }

    /// Price label for a group header; `None` when nothing priced is selected.
    pub fn group_price_label(&self, group: &GroupCode) -> Option<String> {
        let selection = self.resolver.snapshot();
        let price = selection.group(group)?.selected_price();
        (price > 0).then(|| Money::new(price, self.currency.clone()).label())
    }

    /// Surcharge label for an ingredient at its group's active tier.
    pub fn ingredient_price_label(&self, group: &GroupCode, ingredient: &IngredientId) -> Option<String> {
        let selection = self.resolver.snapshot();
        let member = selection.group(group)?.member(ingredient)?;
        Some(Money::new(member.active_variation.price, self.currency.clone()).surcharge_label())
    }

    fn activate(&mut self, index: usize) -> Totals {
        self.active = index;
        let product = &self.products[index];
        tracing::debug!(product = %product.id, "activating product");
        self.resolver.set_active_product(product.groups());
        self.refresh()
    }

    fn refresh(&mut self) -> Totals {
        let base = ProductBase::from(self.active_product());
        let selected = self.resolver.selected_ingredients();
        self.projector.update(&base, &selected)
    }
}
