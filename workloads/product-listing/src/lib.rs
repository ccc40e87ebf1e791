//! Product Listing Page - paginated, category-filtered catalog listing.
//!
//! This workload:
//! - Renders `GET /products` shell-first, then the category bar, the product
//!   cards and the pagination controls as streamed sections
//! - Fetches the listing and the category list concurrently
//! - Handles card selection and "Add to Cart" as form posts that redirect to
//!   the detail and cart views
//!
//! Everything except the Spin entry point builds natively, so the page is
//! tested with fake transports.

pub mod actions;
pub mod page;
pub mod params;
pub mod sections;
pub mod shell;

#[cfg(target_arch = "wasm32")]
mod component;

use edge_core::{ConfigError, RouteConfig, StorefrontConfig, WorkloadManifest};
use edge_observability::StructuredLogger;

use actions::{ADD_TO_CART_PATH, SELECT_PATH};
use params::LISTING_PATH;

/// Workload name used in logs and the manifest.
pub const WORKLOAD_NAME: &str = "product-listing";

/// Route handler names.
pub mod handlers {
    pub const LISTING: &str = "listing";
    pub const SELECT: &str = "select";
    pub const ADD_TO_CART: &str = "add-to-cart";
}

/// Routes served by this component.
pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD_NAME, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new(LISTING_PATH, handlers::LISTING).with_methods(vec!["GET"]))
        .with_route(RouteConfig::new(SELECT_PATH, handlers::SELECT).with_methods(vec!["POST"]))
        .with_route(
            RouteConfig::new(ADD_TO_CART_PATH, handlers::ADD_TO_CART).with_methods(vec!["POST"]),
        )
}

/// Build the config from a variable lookup.
///
/// Keys the lookup does not know keep their defaults.
pub fn load_config<F>(lookup: F) -> Result<StorefrontConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    StorefrontConfig::from_pairs(
        StorefrontConfig::KEYS
            .iter()
            .filter_map(|key| lookup(key).map(|value| (*key, value))),
    )
}

/// Log a request that failed after routing.
pub fn report_failure(logger: &StructuredLogger, result: anyhow::Result<()>) {
    if let Err(e) = result {
        logger
            .error_builder("Request failed")
            .field("error", format!("{:#}", e))
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge_core::{RequestId, RouteMatch};
    use edge_observability::LogOutput;
    use http::Method;

    #[test]
    fn test_manifest_routes() {
        let manifest = manifest();

        match manifest.resolve(&Method::GET, "/products?category=laptops") {
            RouteMatch::Found(route) => assert_eq!(route.handler, handlers::LISTING),
            other => panic!("unexpected {:?}", other),
        }
        match manifest.resolve(&Method::POST, "/products/add-to-cart") {
            RouteMatch::Found(route) => assert_eq!(route.handler, handlers::ADD_TO_CART),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            manifest.resolve(&Method::DELETE, "/products"),
            RouteMatch::MethodNotAllowed
        );
        assert_eq!(
            manifest.resolve(&Method::HEAD, "/products"),
            RouteMatch::MethodNotAllowed
        );
        assert_eq!(
            manifest.resolve(&Method::GET, "/products/select"),
            RouteMatch::MethodNotAllowed
        );
        assert_eq!(manifest.resolve(&Method::GET, "/cart"), RouteMatch::NotFound);
    }

    #[test]
    fn test_report_failure_logs_error() {
        let (output, buffer) = LogOutput::capture();
        let logger = StructuredLogger::new(RequestId::from_string("req-9"))
            .with_workload(WORKLOAD_NAME)
            .with_output(output);

        report_failure(&logger, Ok(()));
        assert!(buffer.lock().unwrap().is_empty());

        report_failure(
            &logger,
            Err(anyhow::anyhow!("Failed to write body").context("respond")),
        );
        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#""level":"error""#));
        assert!(lines[0].contains("respond: Failed to write body"));
    }

    #[test]
    fn test_load_config() {
        let config = load_config(|key| match key {
            "api_base" => Some("https://catalog.internal/".to_string()),
            "narrow_page_size" => Some("4".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.api_base, "https://catalog.internal");
        assert_eq!(config.narrow_page_size, 4);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_load_config_rejects_bad_values() {
        let err = load_config(|key| (key == "default_page_size").then(|| "0".to_string()));
        assert_eq!(
            err,
            Err(ConfigError::ZeroPageSize("default_page_size".to_string()))
        );
    }
}
