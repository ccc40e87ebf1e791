//! Catalog listing domain for the storefront.
//!
//! - **Catalog**: products and categories as served by the catalog API
//! - **Card**: everything a product card displays, derived from a product
//! - **Store**: reducer store holding the selected category and current item
//! - **Navigation**: detail and cart transitions
//! - **Listing**: request derivation, pagination and the listing controller
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let mut store = AppStore::default();
//! store.dispatch(StoreAction::SetCategory(Category::new("smartphones")));
//!
//! let mut controller = ListingController::new(&NavigationState::default(), &config);
//! controller.run_effects(&store, Viewport::Width(390));
//! let url = controller.request_url(&store);
//! // https://dummyjson.com/products/category/smartphones?limit=5&sortBy=rating&skip=0&order=desc
//! ```

pub mod card;
pub mod catalog;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod store;

pub use error::ListingError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{ProductCard, QuantityBounds, Tone};
    pub use crate::catalog::{Category, Product, ProductPage};
    pub use crate::error::ListingError;
    pub use crate::listing::{
        categories_url, derive_query, last_page_number, ListingController, ListingState,
        PageTarget, Viewport,
    };
    pub use crate::navigation::{Navigation, NavigationState};
    pub use crate::store::{AppStore, Store, StoreAction, StoreState};
}
