//! Ingredients and their quantity variations.

use crate::ids::IngredientId;
use crate::nutrition::NutritionFacts;
use serde::{Deserialize, Serialize};

/// One quantity tier of an ingredient (e.g. "Stronger", two shots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityVariation {
    /// Tier display name (e.g. "Standard").
    pub name: String,
    /// Tier quantity. Zero means "none of it".
    pub quantity: i64,
    /// Surcharge for this tier in menu units.
    #[serde(default)]
    pub price: i64,
    /// Nutrition contributed by this tier.
    #[serde(default)]
    pub food_value: NutritionFacts,
}

impl QuantityVariation {
    /// Create a variation with no reported nutrition.
    pub fn new(name: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            food_value: NutritionFacts::absent(),
        }
    }

    /// Set the nutrition contributed by this variation.
    pub fn with_food_value(mut self, food_value: NutritionFacts) -> Self {
        self.food_value = food_value;
        self
    }
}

/// A catalog ingredient offered inside a composition group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Unique ingredient identifier.
    pub id: IngredientId,
    /// Numeric code used by the point of sale.
    #[serde(default)]
    pub code: i64,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL template, resolved by the asset loader.
    #[serde(rename = "imageUrlTemplate", default)]
    pub image_url_template: String,
    /// Available quantity tiers, at most one per quantity.
    pub quantity_variations: Vec<QuantityVariation>,
}

impl Ingredient {
    /// Create an ingredient without variations.
    pub fn new(id: impl Into<IngredientId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: 0,
            name: name.into(),
            description: None,
            image_url_template: String::new(),
            quantity_variations: Vec::new(),
        }
    }

    /// Add a quantity variation.
    pub fn with_variation(mut self, variation: QuantityVariation) -> Self {
        self.quantity_variations.push(variation);
        self
    }

    /// Find the variation offered at `quantity`.
    pub fn variation_at(&self, quantity: i64) -> Option<&QuantityVariation> {
        self.quantity_variations
            .iter()
            .find(|v| v.quantity == quantity)
    }

    /// Check whether the ingredient offers a variation at `quantity`.
    pub fn offers(&self, quantity: i64) -> bool {
        self.variation_at(quantity).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn espresso() -> Ingredient {
        Ingredient::new("espresso", "Espresso")
            .with_variation(QuantityVariation::new("None", 0, 0))
            .with_variation(QuantityVariation::new("Standard", 1, 0))
            .with_variation(QuantityVariation::new("Stronger", 2, 40))
    }

    #[test]
    fn test_variation_lookup() {
        let ingredient = espresso();
        assert_eq!(ingredient.variation_at(2).map(|v| v.price), Some(40));
        assert!(ingredient.offers(0));
        assert!(!ingredient.offers(3));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": "syrup-vanilla",
            "code": 1204,
            "name": "Vanilla",
            "imageUrlTemplate": "https://cdn/{width}x{height}.{ext}",
            "quantity": 0,
            "materialTypeId": "m-1",
            "quantityVariations": [
                {"name": "Standard", "quantity": 1, "price": 50, "foodValue": {"kiloCalories": 40}}
            ]
        }"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.id.as_str(), "syrup-vanilla");
        assert_eq!(ingredient.quantity_variations.len(), 1);
        assert_eq!(
            ingredient.variation_at(1).and_then(|v| v.food_value.kilocalories),
            Some(40.0)
        );
    }
}
