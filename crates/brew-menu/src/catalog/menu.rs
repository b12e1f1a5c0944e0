//! Menu payload as delivered by the catalog source.

use std::path::Path;

use crate::catalog::Product;
use crate::error::MenuError;
use crate::ids::{MenuItemId, ProductId};
use serde::{Deserialize, Serialize};

/// A menu item and its size variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: MenuItemId,
    /// Item name.
    pub name: String,
    /// Item description.
    #[serde(default)]
    pub description: String,
    /// Size variants, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// The parsed menu of one store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    /// Menu items.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Parse a menu from JSON.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a menu file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Find a product and the item it belongs to.
    pub fn find_product(&self, id: &ProductId) -> Option<(&MenuItem, &Product)> {
        self.items.iter().find_map(|item| {
            item.products
                .iter()
                .find(|p| &p.id == id)
                .map(|product| (item, product))
        })
    }

    /// Iterate over every product on the menu.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.items.iter().flat_map(|item| item.products.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"{
        "items": [
            {
                "id": "latte",
                "name": "Latte",
                "products": [
                    {"id": "latte-s", "name": "Latte S", "prices": [{"level": 1, "value": 250}]},
                    {"id": "latte-m", "name": "Latte M", "prices": [{"level": 1, "value": 300}]}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_menu_from_json() {
        let menu = Menu::from_json(MENU).unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.products().count(), 2);
    }

    #[test]
    fn test_find_product() {
        let menu = Menu::from_json(MENU).unwrap();
        let (item, product) = menu.find_product(&ProductId::new("latte-m")).unwrap();
        assert_eq!(item.id.as_str(), "latte");
        assert_eq!(product.base_price(), 300);
        assert!(menu.find_product(&ProductId::new("mocha")).is_none());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Menu::from_json("{\"items\": 3}").unwrap_err();
        assert!(matches!(err, MenuError::Parse(_)));
    }
}
