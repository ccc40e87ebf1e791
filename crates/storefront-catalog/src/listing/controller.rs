//! Listing controller.
//!
//! Holds the pagination state of one listing page and folds viewport,
//! category and response changes into it. Rendering happens elsewhere; the
//! controller hands out [`ProductCard`]s and pagination targets.

use edge_core::StorefrontConfig;
use edge_data::{DependencyTag, FetchAdapter, FetchClient, FetchState, Transport};

use crate::card::ProductCard;
use crate::catalog::{Product, ProductPage};
use crate::error::ListingError;
use crate::navigation::{Navigation, NavigationState};
use crate::store::{Store, StoreAction};

use super::pagination::{self, PageTarget};
use super::query::derive_query;
use super::viewport::Viewport;

/// Initial `total`, before any response arrives.
const INITIAL_TOTAL: u32 = 10;

/// Listing query state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    /// Page size.
    pub limit: u32,
    /// Offset of the first item requested.
    pub skip: u32,
    /// Result count reported by the last response.
    pub total: u32,
    /// 1-based page shown.
    pub page_number: u32,
    /// Query best sellers instead of the selected category.
    pub best_seller: bool,
    /// Products shown; `None` until a non-empty response arrives.
    pub items: Option<Vec<Product>>,
}

/// Drives one listing page.
#[derive(Debug)]
pub struct ListingController {
    state: ListingState,
    config: StorefrontConfig,
    /// Slug seen by the previous effect cycle; outer `None` before the first.
    observed_category: Option<Option<String>>,
}

impl ListingController {
    /// Create a controller in its initial state.
    pub fn new(nav: &NavigationState, config: &StorefrontConfig) -> Self {
        Self {
            state: ListingState {
                limit: config.default_page_size,
                skip: 0,
                total: INITIAL_TOTAL,
                page_number: 1,
                best_seller: nav.best_sellers,
                items: None,
            },
            config: config.clone(),
            observed_category: None,
        }
    }

    /// Restore a position carried over from a previous page view.
    ///
    /// A zero `limit` or `page_number` keeps the initial value.
    pub fn resume(mut self, page_number: u32, skip: u32, limit: u32) -> Self {
        if page_number > 0 {
            self.state.page_number = page_number;
        }
        if limit > 0 {
            self.state.limit = limit;
        }
        self.state.skip = skip;
        self
    }

    /// Current state.
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Request URL for the current state and the store's category.
    pub fn request_url<S: Store + ?Sized>(&self, store: &S) -> String {
        derive_query(
            &self.config.api_base,
            store.category(),
            self.state.best_seller,
            self.state.limit,
            self.state.skip,
        )
    }

    /// Run the post-render effects.
    ///
    /// A narrow viewport shrinks the page size; widening never restores it.
    /// A category different from the one seen by the previous cycle clears
    /// best-seller mode. The first cycle only records the category.
    pub fn run_effects<S: Store + ?Sized>(&mut self, store: &S, viewport: Viewport) {
        let slug = store.category().map(|c| c.slug.clone());
        let category_changed = match &self.observed_category {
            Some(previous) => *previous != slug,
            None => false,
        };

        if viewport.is_narrow(self.config.narrow_breakpoint_px)
            && self.state.limit != self.config.narrow_page_size
        {
            self.state.limit = self.config.narrow_page_size;
            tracing::debug!(limit = self.state.limit, ?viewport, "narrow viewport");
        }

        if category_changed && self.state.best_seller {
            self.state.best_seller = false;
            tracing::debug!(category = ?slug, "category changed, leaving best sellers");
        }

        self.observed_category = Some(slug);
    }

    /// Fold the adapter's state into the listing.
    ///
    /// A payload updates `total`; its products replace the items only when
    /// non-empty. Errors change nothing.
    pub fn apply_response(&mut self, fetch: &FetchState<ProductPage>) {
        let Some(page) = &fetch.data else {
            return;
        };

        self.state.total = page.total;
        if !page.products.is_empty() {
            self.state.items = Some(page.products.clone());
        }
        tracing::debug!(
            total = page.total,
            received = page.products.len(),
            "listing response applied"
        );
    }

    /// Request the current URL through `adapter` and apply the outcome.
    pub async fn refresh<S, R>(
        &mut self,
        store: &S,
        adapter: &mut FetchAdapter<ProductPage>,
        client: &FetchClient<R>,
    ) where
        S: Store + ?Sized,
        R: Transport,
    {
        let url = self.request_url(store);
        let state = adapter.fetch(&url, client, DependencyTag::Catalog).await;
        self.apply_response(state);
    }

    /// Number of the last page.
    pub fn last_page_number(&self) -> u32 {
        pagination::last_page_number(self.state.total, self.state.limit)
    }

    /// One card per item shown.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.state
            .items
            .iter()
            .flatten()
            .map(ProductCard::from_product)
            .collect()
    }

    /// Open the detail view for `product`.
    pub fn click_card<S: Store + ?Sized>(&self, store: &mut S, product: &Product) -> Navigation {
        store.dispatch(StoreAction::SetItem(product.clone()));
        Navigation::Detail
    }

    /// Take `product` to the cart.
    ///
    /// The store is not touched.
    pub fn click_add_to_cart(&self, product: &Product) -> Result<Navigation, ListingError> {
        if product.stock == 0 {
            return Err(ListingError::OutOfStock(product.id));
        }
        Ok(Navigation::Cart {
            item: product.clone(),
            add: true,
        })
    }

    /// Whether the "previous" control is shown.
    pub fn show_previous(&self) -> bool {
        self.state.page_number > 1
    }

    /// Whether the "next" control is shown.
    pub fn show_next(&self) -> bool {
        self.state.page_number < self.last_page_number()
    }

    /// Position the "previous" control leads to, if shown.
    pub fn previous_target(&self) -> Option<PageTarget> {
        self.show_previous()
            .then(|| PageTarget::previous(self.state.page_number, self.state.limit))
    }

    /// Position the "next" control leads to, if shown.
    pub fn next_target(&self) -> Option<PageTarget> {
        self.show_next()
            .then(|| PageTarget::next(self.state.page_number, self.state.limit))
    }

    /// Activate the "previous" control.
    pub fn click_previous(&mut self) -> Result<PageTarget, ListingError> {
        let target = self
            .previous_target()
            .ok_or(ListingError::ControlHidden("previous"))?;
        self.go_to(target);
        Ok(target)
    }

    /// Activate the "next" control.
    pub fn click_next(&mut self) -> Result<PageTarget, ListingError> {
        let target = self
            .next_target()
            .ok_or(ListingError::ControlHidden("next"))?;
        self.go_to(target);
        Ok(target)
    }

    fn go_to(&mut self, target: PageTarget) {
        self.state.page_number = target.page_number;
        self.state.skip = target.skip;
        tracing::debug!(
            page = target.page_number,
            skip = target.skip,
            "page changed"
        );
    }

    /// Summary line under the listing.
    pub fn summary(&self) -> String {
        pagination::summary(self.state.skip, self.state.total)
    }
}
