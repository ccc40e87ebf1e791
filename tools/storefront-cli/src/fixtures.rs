//! Transport answering catalog requests from JSON files on disk.
//!
//! Layout of a fixture directory:
//!
//! - `categories.json` - the category list
//! - `products.json` - the unfiltered (best seller) product page
//! - `category-<slug>.json` - the product page for one category
//!
//! Requests with no matching file get a 404.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use edge_core::percent_decode;
use edge_data::{FetchError, HttpResponse, Transport};

/// Serves fixture files in place of the catalog API.
#[derive(Debug)]
pub struct FixtureTransport {
    root: PathBuf,
    api_base: String,
    requests: RefCell<Vec<String>>,
}

impl FixtureTransport {
    pub fn new(root: impl Into<PathBuf>, api_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            api_base: api_base.into(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fixture file answering `url`, or `None` for URLs outside the API.
    pub fn fixture_path(&self, url: &str) -> Option<PathBuf> {
        let path = url.strip_prefix(&self.api_base)?;
        let path = path.split('?').next().unwrap_or(path);

        let file = match path.trim_matches('/') {
            "products/categories" => "categories.json".to_string(),
            "products" => "products.json".to_string(),
            other => {
                let slug = percent_decode(other.strip_prefix("products/category/")?);
                if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
                    return None;
                }
                format!("category-{}.json", slug)
            }
        };
        Some(self.root.join(file))
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait(?Send)]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        let Some(path) = self.fixture_path(url) else {
            return Err(FetchError::Request(format!("no fixture route for {}", url)));
        };

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(HttpResponse::new(200, body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(HttpResponse::new(404, format!("missing fixture {}", path.display())))
            }
            Err(e) => Err(FetchError::Request(format!("{}: {}", path.display(), e))),
        }
    }
}
