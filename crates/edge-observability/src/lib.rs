//! Observability for the storefront edge platform.
//!
//! - `StructuredLogger` - JSON or human log lines correlated by request ID
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogOutput` - Where entries go: stderr or a capture buffer

mod logging;

pub use logging::*;

pub use edge_core::RequestId;
