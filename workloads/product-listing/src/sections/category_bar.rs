//! Category bar section - best sellers plus one link per category.

use edge_streaming::escape_html;
use storefront_catalog::catalog::Category;

use crate::params::ListingParams;

/// Render the category bar.
///
/// An empty `categories` list still renders the best-sellers link.
pub fn render_category_bar(
    categories: &[Category],
    params: &ListingParams,
    best_seller: bool,
) -> String {
    let active = |on: bool| if on { " active" } else { "" };

    let links: String = categories
        .iter()
        .map(|c| {
            let current = !best_seller && params.category.as_deref() == Some(c.slug.as_str());
            format!(
                r#"<a href="{}" class="category-link{}" data-category="{}">{}</a>"#,
                escape_html(&params.category_href(&c.slug)),
                active(current),
                escape_html(&c.slug),
                escape_html(c.display_name())
            )
        })
        .collect();

    format!(
        r#"<nav class="category-bar" data-section="category-bar" aria-label="Categories">
    <a href="{}" class="category-link best-sellers{}">Best Sellers</a>
    {}
</nav>"#,
        escape_html(&params.best_sellers_href()),
        active(best_seller),
        links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: Option<&str>) -> ListingParams {
        ListingParams {
            category: category.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_marks_active_category() {
        let categories = vec![
            Category::new("beauty").with_name("Beauty"),
            Category::new("laptops").with_name("Laptops"),
        ];
        let html = render_category_bar(&categories, &params(Some("laptops")), false);

        assert!(html.contains(r#"class="category-link active" data-category="laptops""#));
        assert!(html.contains(r#"class="category-link" data-category="beauty""#));
        assert!(html.contains(r#"class="category-link best-sellers">"#));
        assert!(html.contains(">Laptops</a>"));
    }

    #[test]
    fn test_best_sellers_active() {
        let categories = vec![Category::new("beauty")];
        let html = render_category_bar(&categories, &params(Some("beauty")), true);
        assert!(html.contains("best-sellers active"));
        assert!(!html.contains("category-link active"));
    }

    #[test]
    fn test_without_categories() {
        let html = render_category_bar(&[], &params(None), false);
        assert!(html.contains("Best Sellers"));
        assert!(!html.contains("data-category"));
    }
}
