//! Catalog types as served by the remote API.

mod category;
mod product;

pub use category::Category;
pub use product::{Product, ProductPage};
