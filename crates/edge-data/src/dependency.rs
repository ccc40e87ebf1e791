//! Dependency tagging for upstream calls.

/// Upstream dependencies of the storefront pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Product listing queries.
    Catalog,
    /// Category list for navigation.
    Categories,
}

impl DependencyTag {
    /// Whether the page's main content depends on this call.
    ///
    /// Failures of critical dependencies are logged as errors, the rest as
    /// warnings.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Catalog)
    }

    /// Get the name of this dependency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Categories => "categories",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_catalog_is_critical() {
        assert!(DependencyTag::Catalog.is_critical());
        assert!(!DependencyTag::Categories.is_critical());
        assert_eq!(DependencyTag::Categories.to_string(), "categories");
    }
}
