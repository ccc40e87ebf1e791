//! Catalog API request URLs.

use edge_core::percent_encode_path_segment;

use crate::catalog::Category;

/// Slug interpolated when no category is selected.
const MISSING_SLUG: &str = "undefined";

/// Build the listing request URL.
///
/// Best-seller mode queries the unfiltered product list; otherwise the
/// category-scoped list for `category`'s slug. Both sort by rating,
/// descending.
pub fn derive_query(
    api_base: &str,
    category: Option<&Category>,
    best_seller: bool,
    limit: u32,
    skip: u32,
) -> String {
    let path = if best_seller {
        "/products".to_string()
    } else {
        let slug = category.map(|c| c.slug.as_str()).unwrap_or(MISSING_SLUG);
        format!("/products/category/{}", percent_encode_path_segment(slug))
    };

    format!(
        "{}{}?limit={}&sortBy=rating&skip={}&order=desc",
        api_base, path, limit, skip
    )
}

/// URL of the category list.
pub fn categories_url(api_base: &str) -> String {
    format!("{}/products/categories", api_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://dummyjson.com";

    #[test]
    fn test_best_seller_query() {
        let category = Category::new("beauty");
        assert_eq!(
            derive_query(BASE, Some(&category), true, 10, 20),
            "https://dummyjson.com/products?limit=10&sortBy=rating&skip=20&order=desc"
        );
    }

    #[test]
    fn test_category_query() {
        let category = Category::new("mens-shoes");
        assert_eq!(
            derive_query(BASE, Some(&category), false, 5, 0),
            "https://dummyjson.com/products/category/mens-shoes?limit=5&sortBy=rating&skip=0&order=desc"
        );
    }

    #[test]
    fn test_missing_category_interpolates_undefined() {
        assert_eq!(
            derive_query(BASE, None, false, 10, 0),
            "https://dummyjson.com/products/category/undefined?limit=10&sortBy=rating&skip=0&order=desc"
        );
    }

    #[test]
    fn test_slug_is_encoded_as_path_segment() {
        let category = Category::new("home decoration");
        assert_eq!(
            derive_query(BASE, Some(&category), false, 10, 0),
            "https://dummyjson.com/products/category/home%20decoration?limit=10&sortBy=rating&skip=0&order=desc"
        );
    }

    #[test]
    fn test_categories_url() {
        assert_eq!(categories_url(BASE), "https://dummyjson.com/products/categories");
    }
}
