//! Menu catalog models as returned by the MenuLink backend API.

use serde::{Deserialize, Serialize};

use super::cart::NewCartItem;
use super::id::{CategoryId, MenuItemId};
use super::price::Price;

/// A single dish or product on a restaurant menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Price,
    /// Image URL, if the owner uploaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Snapshot the fields the cart keeps for this item.
    #[must_use]
    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

/// The public profile of a restaurant, as far as ordering needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub slug: String,
    /// WhatsApp number orders are sent to; free-form as entered by the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_api_shape() {
        let json = r#"{
            "id": "c1",
            "name": "Starters",
            "menuItems": [
                { "id": "m1", "name": "Soup", "price": 100 },
                { "id": "m2", "name": "Salad", "description": "Fresh", "price": 80.5, "image": "https://cdn/x.png" }
            ]
        }"#;
        let category: MenuCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.menu_items.len(), 2);
        assert_eq!(category.menu_items[1].description.as_deref(), Some("Fresh"));
        assert!(category.menu_items[0].image.is_none());
    }

    #[test]
    fn test_category_without_items() {
        let category: MenuCategory =
            serde_json::from_str(r#"{ "id": "c2", "name": "Drinks" }"#).unwrap();
        assert!(category.menu_items.is_empty());
    }

    #[test]
    fn test_to_cart_item_snapshots_fields() {
        let item = MenuItem {
            id: MenuItemId::new("m1"),
            name: "Soup".to_string(),
            description: Some("Hot".to_string()),
            price: Price::parse("100").unwrap(),
            image: None,
        };
        let snapshot = item.to_cart_item();
        assert_eq!(snapshot.id, item.id);
        assert_eq!(snapshot.name, "Soup");
        assert_eq!(snapshot.price, item.price);
    }
}
