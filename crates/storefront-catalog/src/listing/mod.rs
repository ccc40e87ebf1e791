//! Product listing: request derivation, pagination arithmetic, viewport
//! handling and the controller tying them together.

mod controller;
mod pagination;
mod query;
mod viewport;

pub use controller::{ListingController, ListingState};
pub use pagination::{last_page_number, summary, PageTarget};
pub use query::{categories_url, derive_query};
pub use viewport::Viewport;
