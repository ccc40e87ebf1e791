//! One listing page view: data loading and section rendering.

use std::time::Instant;

use edge_core::{StorefrontConfig, WorkloadError};
use edge_data::{DependencyTag, FetchAdapter, FetchClient, FetchError, Transport};
use edge_observability::StructuredLogger;
use edge_streaming::{Shell, StreamingSink};
use futures::Sink;
use storefront_catalog::catalog::{Category, ProductPage};
use storefront_catalog::listing::{categories_url, ListingController};
use storefront_catalog::store::{AppStore, Store, StoreAction};

use crate::params::ListingParams;
use crate::sections::{render_category_bar, render_listing, render_pagination};

/// Section names, in streaming order.
pub const SECTIONS: [&str; 3] = ["category-bar", "listing", "pagination"];

/// A listing view with its data loaded.
#[derive(Debug)]
pub struct ListingPage {
    pub params: ListingParams,
    pub controller: ListingController,
    pub store: AppStore,
    pub categories: Vec<Category>,
    /// URL the listing was requested with.
    pub request_url: String,
    pub listing_error: Option<FetchError>,
}

impl ListingPage {
    /// Run one controller cycle for `params`.
    ///
    /// The listing and the category list are fetched concurrently. Fetch
    /// failures are logged; the page renders with whatever arrived.
    pub async fn load<R: Transport>(
        params: ListingParams,
        config: &StorefrontConfig,
        client: &FetchClient<R>,
        logger: &StructuredLogger,
    ) -> Self {
        let mut store = AppStore::default();
        if let Some(slug) = &params.category {
            store.dispatch(StoreAction::SetCategory(Category::new(slug.clone())));
        }

        let mut controller = ListingController::new(&params.navigation(), config)
            .resume(params.page, params.skip, params.limit);
        controller.run_effects(&store, params.viewport);
        let request_url = controller.request_url(&store);

        let mut listing = FetchAdapter::<ProductPage>::new();
        let mut categories = FetchAdapter::<Vec<Category>>::new();
        let categories_url = categories_url(&config.api_base);

        let started = Instant::now();
        futures::join!(
            controller.refresh(&store, &mut listing, client),
            categories.fetch(&categories_url, client, DependencyTag::Categories),
        );
        let elapsed = started.elapsed();

        log_fetch(
            logger,
            DependencyTag::Catalog,
            &request_url,
            listing.state().error.as_ref(),
            elapsed,
        );
        log_fetch(
            logger,
            DependencyTag::Categories,
            &categories_url,
            categories.state().error.as_ref(),
            elapsed,
        );

        let categories = categories.state().data.clone().unwrap_or_default();

        // Swap the bare slug for the listed category so its name is shown.
        let listed = store
            .category()
            .and_then(|active| categories.iter().find(|c| c.slug == active.slug))
            .cloned();
        if let Some(category) = listed {
            store.dispatch(StoreAction::SetCategory(category));
        }

        Self {
            params,
            controller,
            store,
            categories,
            request_url,
            listing_error: listing.state().error.clone(),
        }
    }

    /// Heading above the cards.
    pub fn heading(&self) -> String {
        if self.controller.state().best_seller {
            return "Best Sellers".to_string();
        }
        match self.store.category() {
            Some(category) => category.display_name().to_string(),
            None => "Products".to_string(),
        }
    }

    /// Rendered sections, named as in [`SECTIONS`].
    pub fn render_sections(&self) -> Vec<(&'static str, String)> {
        let state = self.controller.state();
        let products = state.items.as_deref().unwrap_or_default();
        let cards = self.controller.cards();

        vec![
            (
                SECTIONS[0],
                render_category_bar(&self.categories, &self.params, state.best_seller),
            ),
            (SECTIONS[1], render_listing(&self.heading(), products, &cards)),
            (
                SECTIONS[2],
                render_pagination(&self.controller, &self.params),
            ),
        ]
    }

    /// Stream the sections into a sink whose shell is already sent, then
    /// close the document.
    pub async fn stream<S, E>(
        &self,
        sink: &mut StreamingSink<S, E>,
        shell: &Shell,
    ) -> Result<(), WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: std::fmt::Display,
    {
        for (name, html) in self.render_sections() {
            sink.send_section(name, &html).await?;
        }
        sink.complete(&shell.render_closing()).await
    }
}

fn log_fetch(
    logger: &StructuredLogger,
    tag: DependencyTag,
    url: &str,
    error: Option<&FetchError>,
    elapsed: std::time::Duration,
) {
    match error {
        None => logger
            .info_builder("Fetch complete")
            .field("dependency", tag.name())
            .field("url", url)
            .duration_ms("fetch_ms", elapsed)
            .emit(),
        Some(e) => {
            let builder = if tag.is_critical() {
                logger.error_builder("Fetch failed")
            } else {
                logger.warn_builder("Fetch failed")
            };
            builder
                .field("dependency", tag.name())
                .field("url", url)
                .field("error", e.to_string())
                .duration_ms("fetch_ms", elapsed)
                .emit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::create_shell;
    use async_trait::async_trait;
    use edge_core::{RequestContext, RequestId, TimingContext};
    use edge_data::HttpResponse;
    use edge_observability::LogOutput;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeTransport {
        responses: HashMap<String, HttpResponse>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn with(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(url.to_string(), HttpResponse::new(status, body.as_bytes()));
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Request(format!("connection refused: {}", url)))
        }
    }

    const CATEGORIES: &str = r#"[
        {"slug": "laptops", "name": "Laptops", "url": "https://dummyjson.com/products/category/laptops"},
        {"slug": "tablets", "name": "Tablets", "url": "https://dummyjson.com/products/category/tablets"}
    ]"#;

    const LAPTOPS: &str = r#"{
        "total": 25, "skip": 0, "limit": 10,
        "products": [
            {"id": 78, "title": "Apple MacBook Pro 14 Inch Space Grey", "price": 1999.99,
             "rating": 3.4, "stock": 24, "minimumOrderQuantity": 1,
             "shippingInformation": "Ships in 3-5 business days"},
            {"id": 79, "title": "Asus Zenbook Pro", "price": 1799.99,
             "rating": 4.2, "stock": 0, "minimumOrderQuantity": 1}
        ]
    }"#;

    fn logger() -> (StructuredLogger, Arc<Mutex<Vec<String>>>) {
        let (output, buffer) = LogOutput::capture();
        let logger = StructuredLogger::new(RequestId::from_string("req-1"))
            .with_workload("product-listing")
            .with_output(output);
        (logger, buffer)
    }

    fn params(path: &str) -> ListingParams {
        ListingParams::from_context(&RequestContext::new(http::Method::GET, path))
    }

    fn transport() -> FakeTransport {
        FakeTransport::default()
            .with("https://dummyjson.com/products/categories", 200, CATEGORIES)
            .with(
                "https://dummyjson.com/products/category/laptops?limit=10&sortBy=rating&skip=0&order=desc",
                200,
                LAPTOPS,
            )
    }

    #[test]
    fn test_load_category_page() {
        let client = FetchClient::new(transport());
        let (logger, buffer) = logger();
        let config = StorefrontConfig::default();

        let page = block_on(ListingPage::load(
            params("/products?category=laptops"),
            &config,
            &client,
            &logger,
        ));

        assert_eq!(client.transport().calls.borrow().len(), 2);
        assert_eq!(page.controller.state().total, 25);
        assert_eq!(page.controller.cards().len(), 2);
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.heading(), "Laptops");
        assert!(page.listing_error.is_none());
        assert_eq!(buffer.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_rendered_sections() {
        let client = FetchClient::new(transport());
        let (logger, _) = logger();
        let page = block_on(ListingPage::load(
            params("/products?category=laptops"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        let sections = page.render_sections();
        let names: Vec<&str> = sections.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, SECTIONS);

        let listing = &sections[1].1;
        assert!(listing.contains(r#"class="add-to-cart" disabled>Out of Stock"#));
        assert!(listing.contains(r#"product-rating tone-green">Rating: 4.2"#));
        assert!(listing.contains(r#"product-rating tone-yellow">Rating: 3.4"#));

        let pagination = &sections[2].1;
        assert!(pagination.contains("Showing 1 to 10 of 25 results"));
        assert!(!pagination.contains(r#"data-control="previous""#));
        assert!(pagination.contains(r#"data-control="next""#));
    }

    #[test]
    fn test_narrow_viewport_requests_five() {
        let narrow = "https://dummyjson.com/products/category/laptops?limit=5&sortBy=rating&skip=0&order=desc";
        let client = FetchClient::new(transport().with(narrow, 200, LAPTOPS));
        let (logger, _) = logger();

        let page = block_on(ListingPage::load(
            params("/products?category=laptops&vw=390"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        assert!(client.transport().calls.borrow().iter().any(|u| u == narrow));
        assert_eq!(page.request_url, narrow);
        assert_eq!(page.controller.state().limit, 5);
        assert!(page.render_sections()[2].1.contains("limit=5&amp;vw=390"));
    }

    #[test]
    fn test_best_sellers_page() {
        let url = "https://dummyjson.com/products?limit=10&sortBy=rating&skip=0&order=desc";
        let client = FetchClient::new(transport().with(url, 200, LAPTOPS));
        let (logger, _) = logger();

        let page = block_on(ListingPage::load(
            params("/products?best_sellers=true&category=laptops"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        assert_eq!(page.request_url, url);
        assert_eq!(page.heading(), "Best Sellers");
        assert!(page.render_sections()[0].1.contains("best-sellers active"));
    }

    #[test]
    fn test_failed_listing_renders_no_cards() {
        let client = FetchClient::new(
            FakeTransport::default().with("https://dummyjson.com/products/categories", 200, CATEGORIES),
        );
        let (logger, buffer) = logger();

        let page = block_on(ListingPage::load(
            params("/products?category=laptops"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        assert!(page.listing_error.is_some());
        let listing = &page.render_sections()[1].1;
        assert!(listing.contains(r#"data-empty="true""#));
        assert!(!listing.contains("connection refused"));

        let lines = buffer.lock().unwrap();
        assert!(lines.iter().any(|l| l.contains(r#""level":"error""#) && l.contains("catalog")));
    }

    #[test]
    fn test_failed_categories_is_a_warning() {
        let client = FetchClient::new(FakeTransport::default().with(
            "https://dummyjson.com/products/category/laptops?limit=10&sortBy=rating&skip=0&order=desc",
            200,
            LAPTOPS,
        ));
        let (logger, buffer) = logger();

        let page = block_on(ListingPage::load(
            params("/products?category=laptops"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        assert!(page.categories.is_empty());
        assert_eq!(page.heading(), "laptops");
        let lines = buffer.lock().unwrap();
        assert!(lines.iter().any(|l| l.contains(r#""level":"warn""#) && l.contains("categories")));
    }

    #[test]
    fn test_stream_sends_sections_in_order() {
        let client = FetchClient::new(transport());
        let (logger, _) = logger();
        let page = block_on(ListingPage::load(
            params("/products?category=laptops"),
            &StorefrontConfig::default(),
            &client,
            &logger,
        ));

        let shell = create_shell(&page.heading());
        let mut sink: StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> =
            StreamingSink::new(Vec::new(), TimingContext::new());

        block_on(async {
            sink.send_shell(&shell.render_opening()).await.unwrap();
            page.stream(&mut sink, &shell).await.unwrap();
        });

        assert_eq!(sink.sections_sent(), SECTIONS);
        let html = String::from_utf8(sink.into_inner().concat()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.find("category-bar").unwrap() < html.find("data-section=\"listing\"").unwrap());
    }
}
