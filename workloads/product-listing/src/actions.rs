//! Card interactions posted back from the listing.
//!
//! Both forms carry the product as JSON in an `item` field. Selecting a card
//! puts the item in the store and redirects to the detail view; adding to
//! the cart redirects to the cart view without touching the store.

use edge_core::{parse_query_string, StorefrontConfig};
use edge_observability::StructuredLogger;
use storefront_catalog::catalog::Product;
use storefront_catalog::listing::ListingController;
use storefront_catalog::navigation::NavigationState;
use storefront_catalog::store::{AppStore, Store};
use storefront_catalog::ListingError;

/// Card selection endpoint.
pub const SELECT_PATH: &str = "/products/select";

/// Add-to-cart endpoint.
pub const ADD_TO_CART_PATH: &str = "/products/add-to-cart";

/// Cookie carrying the current item's id to the detail view.
pub const CURRENT_ITEM_COOKIE: &str = "current_item";

/// Response to a card interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ActionResponse {
    fn redirect(location: String) -> Self {
        Self {
            status: 303,
            headers: vec![("location".to_string(), location)],
            body: String::new(),
        }
    }

    /// Plain-text response with `status`.
    pub fn plain(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: body.into(),
        }
    }

    fn with_header(mut self, name: &str, value: String) -> Self {
        self.headers.push((name.to_string(), value));
        self
    }

    /// First header named `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decode the product posted in a form body.
///
/// A `quantity` field, when present and numeric, presets the item's quantity.
pub fn decode_item(form_body: &[u8]) -> Result<Product, ListingError> {
    let form = parse_query_string(&String::from_utf8_lossy(form_body));
    let json = form
        .get("item")
        .ok_or_else(|| ListingError::InvalidItem("missing item field".to_string()))?;

    let mut product = Product::from_json(json)?;
    if let Some(quantity) = form.get("quantity").and_then(|q| q.trim().parse().ok()) {
        product.quantity = Some(quantity);
    }
    Ok(product)
}

/// Handle a card click.
pub fn select(
    form_body: &[u8],
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> ActionResponse {
    let product = match decode_item(form_body) {
        Ok(product) => product,
        Err(e) => return rejected(e, logger),
    };

    let controller = ListingController::new(&NavigationState::default(), config);
    let mut store = AppStore::default();
    let nav = controller.click_card(&mut store, &product);

    let mut response = ActionResponse::redirect(nav.location(config));
    if let Some(item) = &store.state().current_item {
        response = response.with_header(
            "set-cookie",
            format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                CURRENT_ITEM_COOKIE, item.id
            ),
        );
    }

    logger
        .info_builder("Item selected")
        .field_i64("product_id", product.id as i64)
        .emit();
    response
}

/// Handle an "Add to Cart" click.
pub fn add_to_cart(
    form_body: &[u8],
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> ActionResponse {
    let product = match decode_item(form_body) {
        Ok(product) => product,
        Err(e) => return rejected(e, logger),
    };

    let controller = ListingController::new(&NavigationState::default(), config);
    match controller.click_add_to_cart(&product) {
        Ok(nav) => {
            logger
                .info_builder("Item sent to cart")
                .field_i64("product_id", product.id as i64)
                .emit();
            ActionResponse::redirect(nav.location(config))
        }
        Err(e) => rejected(e, logger),
    }
}

fn rejected(error: ListingError, logger: &StructuredLogger) -> ActionResponse {
    let status = match error {
        ListingError::OutOfStock(_) => 409,
        ListingError::ControlHidden(_) | ListingError::InvalidItem(_) => 400,
    };
    logger
        .warn_builder("Card action rejected")
        .field("error", error.to_string())
        .field_i64("status", i64::from(status))
        .emit();
    ActionResponse::plain(status, error.to_string())
}
