//! Product card view model.
//!
//! Everything a listing card shows is derived here so renderers only format.

use serde::Serialize;

use crate::catalog::Product;

/// Colour state of a card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

impl Tone {
    /// Rating tone: green above 3.8, yellow above 2.5, red otherwise or when
    /// unrated.
    pub fn for_rating(rating: Option<f64>) -> Self {
        match rating {
            Some(r) if r > 3.8 => Tone::Green,
            Some(r) if r > 2.5 => Tone::Yellow,
            _ => Tone::Red,
        }
    }

    /// Stock tone: green when any unit is available.
    pub fn for_stock(stock: u32) -> Self {
        if stock > 0 {
            Tone::Green
        } else {
            Tone::Red
        }
    }

    /// CSS class carrying this tone.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Green => "tone-green",
            Tone::Yellow => "tone-yellow",
            Tone::Red => "tone-red",
        }
    }
}

/// Bounds of the quantity selector.
///
/// `max` is reported as computed, even when it falls below `min` or below
/// zero for low-stock products; see [`QuantityBounds::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityBounds {
    pub min: i64,
    pub max: i64,
    /// Initial value of the selector.
    pub initial: i64,
}

impl QuantityBounds {
    /// `min` is the minimum order quantity. In stock, `max` is
    /// `floor(stock / 2) - 2 * min`; out of stock it equals `min`.
    pub fn for_product(product: &Product) -> Self {
        let min = i64::from(product.minimum_order_quantity);
        let max = if product.stock > 0 {
            i64::from(product.stock / 2) - min * 2
        } else {
            min
        };
        let initial = product
            .quantity
            .filter(|q| *q > 0)
            .map(i64::from)
            .unwrap_or(min);

        Self { min, max, initial }
    }

    /// True when no quantity satisfies both bounds.
    pub fn is_degenerate(&self) -> bool {
        self.max < self.min
    }
}

/// Display data for one product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    /// Price with two decimals, or "N/A".
    pub price_text: String,
    /// Rating with one decimal, or "No rating".
    pub rating_text: String,
    pub rating_tone: Tone,
    pub stock_text: String,
    pub stock_tone: Tone,
    pub shipping_text: String,
    pub quantity: QuantityBounds,
    pub add_to_cart_label: &'static str,
    pub add_to_cart_disabled: bool,
}

impl ProductCard {
    /// Derive the card for a product.
    pub fn from_product(product: &Product) -> Self {
        let description = non_empty(product.description.as_deref())
            .unwrap_or("Description not available")
            .to_string();

        let price_text = product
            .price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "N/A".to_string());

        let rating_text = product
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "No rating".to_string());

        let stock_text = if product.in_stock() {
            format!("{} available", product.stock)
        } else {
            "Out of stock".to_string()
        };

        let shipping_text = non_empty(product.shipping_information.as_deref())
            .unwrap_or("Not available")
            .to_string();

        Self {
            id: product.id,
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            description,
            price_text,
            rating_text,
            rating_tone: Tone::for_rating(product.rating),
            stock_text,
            stock_tone: Tone::for_stock(product.stock),
            shipping_text,
            quantity: QuantityBounds::for_product(product),
            add_to_cart_label: if product.in_stock() {
                "Add to Cart"
            } else {
                "Out of Stock"
            },
            add_to_cart_disabled: product.stock == 0,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
