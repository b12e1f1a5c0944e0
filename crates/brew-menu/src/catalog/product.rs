//! Products, their prices, and their customizable composition.

use crate::catalog::CompositionGroup;
use crate::ids::ProductId;
use crate::nutrition::NutritionFacts;
use serde::{Deserialize, Serialize};

/// A price at a given price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price level reported by the menu service.
    pub level: i64,
    /// Price in menu units.
    pub value: i64,
}

/// Customizable composition of a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    /// Groups in display order.
    #[serde(default)]
    pub groups: Vec<CompositionGroup>,
}

/// A sellable product: one size variant of a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Numeric code used by the point of sale.
    #[serde(default)]
    pub code: i64,
    /// Product name.
    pub name: String,
    /// Description shown under the product.
    #[serde(default)]
    pub description: String,
    /// Size display name (e.g. "Medium, 350 ml").
    #[serde(default)]
    pub size_name: Option<String>,
    /// Short size label (e.g. "M").
    #[serde(default)]
    pub size_label: Option<String>,
    /// Prices, the first one applies.
    #[serde(default)]
    pub prices: Vec<PriceLevel>,
    /// Image URL template, resolved by the asset loader.
    #[serde(rename = "imageUrlTemplate", default)]
    pub image_url_template: String,
    /// Nutrition of the product without customization.
    #[serde(default)]
    pub food_value: Option<NutritionFacts>,
    /// Customizable composition, if the product has one.
    #[serde(default)]
    pub composition: Option<Composition>,
}

impl Product {
    /// Create a product with a single price and no composition.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            code: 0,
            name: name.into(),
            description: String::new(),
            size_name: None,
            size_label: None,
            prices: vec![PriceLevel { level: 0, value: price }],
            image_url_template: String::new(),
            food_value: None,
            composition: None,
        }
    }

    /// Set the nutrition of the bare product.
    pub fn with_food_value(mut self, food_value: NutritionFacts) -> Self {
        self.food_value = Some(food_value);
        self
    }

    /// Append a composition group.
    pub fn with_group(mut self, group: CompositionGroup) -> Self {
        self.composition
            .get_or_insert_with(Composition::default)
            .groups
            .push(group);
        self
    }

    /// Price of the bare product: the first price level, or zero.
    pub fn base_price(&self) -> i64 {
        self.prices.first().map(|p| p.value).unwrap_or(0)
    }

    /// Nutrition of the bare product, if the menu reports it.
    pub fn base_nutrition(&self) -> Option<NutritionFacts> {
        self.food_value
    }

    /// Composition groups, empty when the product is not customizable.
    pub fn groups(&self) -> &[CompositionGroup] {
        self.composition
            .as_ref()
            .map(|c| c.groups.as_slice())
            .unwrap_or(&[])
    }
}
