//! Listing request parameters.

use edge_core::{percent_encode, RequestContext};
use storefront_catalog::listing::{PageTarget, Viewport};
use storefront_catalog::navigation::NavigationState;

/// Path the listing is served on.
pub const LISTING_PATH: &str = "/products";

/// Client hint carrying the viewport width.
pub const VIEWPORT_HINT_HEADER: &str = "sec-ch-viewport-width";

/// Parameters of a listing request.
///
/// `page`, `skip` and `limit` carry the position of a previous view across
/// pagination links; zero means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    pub category: Option<String>,
    pub best_sellers: bool,
    pub page: u32,
    pub skip: u32,
    pub limit: u32,
    pub viewport: Viewport,
    /// Width passed as `vw`, echoed into generated links.
    pub viewport_param: Option<u32>,
}

impl ListingParams {
    /// Read parameters from the query string, falling back to the viewport
    /// client hint.
    pub fn from_context(ctx: &RequestContext) -> Self {
        let number = |name: &str| {
            ctx.query_param(name)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(0)
        };

        let viewport = match ctx.query_param("vw") {
            Some(vw) => Viewport::from_hint(Some(vw)),
            None => Viewport::from_hint(ctx.header(VIEWPORT_HINT_HEADER)),
        };
        let viewport_param = match (ctx.query_param("vw"), viewport) {
            (Some(_), Viewport::Width(w)) => Some(w),
            _ => None,
        };

        Self {
            category: ctx
                .query_param("category")
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
            best_sellers: matches!(ctx.query_param("best_sellers"), Some("true") | Some("1")),
            page: number("page"),
            skip: number("skip"),
            limit: number("limit"),
            viewport,
            viewport_param,
        }
    }

    /// Navigation state this request arrived with.
    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            best_sellers: self.best_sellers,
        }
    }

    /// Link to the listing at `target`.
    pub fn page_href(&self, target: PageTarget, limit: u32, best_seller: bool) -> String {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", percent_encode(category)));
        }
        if best_seller {
            pairs.push("best_sellers=true".to_string());
        }
        pairs.push(format!("page={}", target.page_number));
        pairs.push(format!("skip={}", target.skip));
        pairs.push(format!("limit={}", limit));
        if let Some(vw) = self.viewport_param {
            pairs.push(format!("vw={}", vw));
        }
        format!("{}?{}", LISTING_PATH, pairs.join("&"))
    }

    /// Link to the first page of `slug`.
    pub fn category_href(&self, slug: &str) -> String {
        let mut href = format!("{}?category={}", LISTING_PATH, percent_encode(slug));
        if let Some(vw) = self.viewport_param {
            href.push_str(&format!("&vw={}", vw));
        }
        href
    }

    /// Link to the first page of best sellers.
    pub fn best_sellers_href(&self) -> String {
        let mut href = format!("{}?best_sellers=true", LISTING_PATH);
        if let Some(category) = &self.category {
            href.push_str(&format!("&category={}", percent_encode(category)));
        }
        if let Some(vw) = self.viewport_param {
            href.push_str(&format!("&vw={}", vw));
        }
        href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(path: &str) -> ListingParams {
        ListingParams::from_context(&RequestContext::new(http::Method::GET, path))
    }

    #[test]
    fn test_defaults() {
        let p = params("/products");
        assert_eq!(p, ListingParams::default());
        assert!(!p.navigation().best_sellers);
    }

    #[test]
    fn test_parse_all() {
        let p = params("/products?category=home%20decoration&best_sellers=true&page=3&skip=20&limit=5&vw=390");
        assert_eq!(p.category.as_deref(), Some("home decoration"));
        assert!(p.best_sellers);
        assert_eq!((p.page, p.skip, p.limit), (3, 20, 5));
        assert_eq!(p.viewport, Viewport::Width(390));
        assert_eq!(p.viewport_param, Some(390));
    }

    #[test]
    fn test_malformed_numbers_are_absent() {
        let p = params("/products?page=two&skip=-1&limit=&category=");
        assert_eq!((p.page, p.skip, p.limit), (0, 0, 0));
        assert_eq!(p.category, None);
    }

    #[test]
    fn test_viewport_from_client_hint() {
        let ctx = RequestContext::new(http::Method::GET, "/products?category=laptops")
            .with_headers([("Sec-CH-Viewport-Width", "412")]);
        let p = ListingParams::from_context(&ctx);
        assert_eq!(p.viewport, Viewport::Width(412));
        assert_eq!(p.viewport_param, None);
    }

    #[test]
    fn test_page_href() {
        let p = params("/products?category=mens-shirts&vw=390");
        let target = PageTarget {
            page_number: 2,
            skip: 5,
        };
        assert_eq!(
            p.page_href(target, 5, false),
            "/products?category=mens-shirts&page=2&skip=5&limit=5&vw=390"
        );
        assert_eq!(
            p.page_href(target, 5, true),
            "/products?category=mens-shirts&best_sellers=true&page=2&skip=5&limit=5&vw=390"
        );
    }

    #[test]
    fn test_category_links_drop_position() {
        let p = params("/products?category=beauty&page=4&skip=30&limit=10");
        assert_eq!(p.category_href("skin-care"), "/products?category=skin-care");
        assert_eq!(
            p.best_sellers_href(),
            "/products?best_sellers=true&category=beauty"
        );
    }
}
