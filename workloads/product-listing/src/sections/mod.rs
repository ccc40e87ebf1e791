//! Section renderers for the Product Listing page.

mod category_bar;
mod listing;
mod pagination;

pub use category_bar::*;
pub use listing::*;
pub use pagination::*;
