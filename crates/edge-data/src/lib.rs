//! Data access layer for storefront workloads.
//!
//! This crate provides:
//! - `Transport` - Outbound HTTP seam (Spin on wasm32, fakes in tests)
//! - `FetchClient` - GET + JSON decoding with dependency tagging
//! - `FetchAdapter` - One request per distinct URL, exposing `{data, loading, error}`
//! - `DependencyTag` - Semantic names for upstream calls

mod adapter;
mod client;
mod dependency;

pub use adapter::*;
pub use client::*;
pub use dependency::*;
