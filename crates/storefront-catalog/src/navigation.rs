//! Navigation targets reachable from the listing.

use edge_core::StorefrontConfig;

use crate::catalog::Product;

/// State passed to the listing by whoever navigated to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// List best sellers instead of the selected category.
    pub best_sellers: bool,
}

/// A transition away from the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Product detail view. The item travels through the store.
    Detail,
    /// Cart view, carrying the item to add.
    Cart { item: Product, add: bool },
}

impl Navigation {
    /// Location to redirect to for this transition.
    pub fn location(&self, config: &StorefrontConfig) -> String {
        match self {
            Navigation::Detail => config.detail_route.clone(),
            Navigation::Cart { item, add } => {
                let mut location =
                    format!("{}?add={}&item={}", config.cart_route, add, item.id);
                if let Some(quantity) = item.quantity {
                    location.push_str(&format!("&quantity={}", quantity));
                }
                location
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        let config = StorefrontConfig::default();
        assert_eq!(Navigation::Detail.location(&config), "/item-page");

        let item = Product::from_json(r#"{"id": 17, "title": "Mug", "stock": 3}"#).unwrap();
        let nav = Navigation::Cart { item, add: true };
        assert_eq!(nav.location(&config), "/cart?add=true&item=17");
    }

    #[test]
    fn test_cart_location_carries_quantity() {
        let mut item = Product::from_json(r#"{"id": 17, "title": "Mug", "stock": 30}"#).unwrap();
        item.quantity = Some(4);
        let nav = Navigation::Cart { item, add: true };
        assert_eq!(
            nav.location(&StorefrontConfig::default()),
            "/cart?add=true&item=17&quantity=4"
        );
    }

    #[test]
    fn test_default_state_is_category_mode() {
        assert!(!NavigationState::default().best_sellers);
    }
}
