//! Category types for product organization.

use serde::{Deserialize, Serialize};

/// A product category as listed by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// URL-safe identifier used as a path segment.
    pub slug: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// API URL listing this category's products.
    #[serde(default)]
    pub url: Option<String>,
}

impl Category {
    /// Create a category known only by its slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            url: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show, falling back to the slug.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_category_list() {
        let cats: Vec<Category> = serde_json::from_str(
            r#"[{"slug":"beauty","name":"Beauty","url":"https://dummyjson.com/products/category/beauty"},
                {"slug":"fragrances","name":"Fragrances","url":"https://dummyjson.com/products/category/fragrances"}]"#,
        )
        .unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].slug, "fragrances");
        assert_eq!(cats[0].display_name(), "Beauty");
    }

    #[test]
    fn test_display_name_falls_back_to_slug() {
        assert_eq!(Category::new("mens-shirts").display_name(), "mens-shirts");
        assert_eq!(
            Category::new("mens-shirts").with_name("Mens Shirts").display_name(),
            "Mens Shirts"
        );
    }
}
