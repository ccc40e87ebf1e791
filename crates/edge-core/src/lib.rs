//! Core abstractions for the storefront edge rendering platform.
//!
//! This crate provides the fundamental types shared by workloads:
//! - `WorkloadManifest` / `RouteConfig` - Route table for a component
//! - `StorefrontConfig` - Catalog endpoint and page-size settings
//! - `RequestContext` - Parsed request with query parameters
//! - `TimingContext` - Request lifecycle timing

mod config;
mod context;
mod error;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use workload::*;
