//! Per-URL fetch adapter.

use serde::de::DeserializeOwned;

use crate::client::{FetchClient, FetchError, Transport};
use crate::dependency::DependencyTag;

/// What a consumer sees of the latest request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Latest successfully decoded payload.
    pub data: Option<T>,
    /// True only while a request is outstanding.
    pub loading: bool,
    /// Error of the latest request, if it failed.
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Issues exactly one request per distinct URL value.
///
/// Asking again for the URL last requested is a no-op, whether or not that
/// request has finished. A response is applied when it arrives even if a
/// newer URL has been requested in the meantime.
#[derive(Debug)]
pub struct FetchAdapter<T> {
    url: Option<String>,
    state: FetchState<T>,
    requests_issued: u32,
}

impl<T> Default for FetchAdapter<T> {
    fn default() -> Self {
        Self {
            url: None,
            state: FetchState::default(),
            requests_issued: 0,
        }
    }
}

impl<T> FetchAdapter<T> {
    /// Create an idle adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `url`.
    ///
    /// Returns the URL to request when it differs from the last one, and
    /// marks the adapter loading. Returns `None` when unchanged.
    pub fn begin(&mut self, url: &str) -> Option<String> {
        if self.url.as_deref() == Some(url) {
            return None;
        }
        self.url = Some(url.to_string());
        self.state.loading = true;
        self.requests_issued += 1;
        Some(url.to_string())
    }

    /// Apply the outcome of a request.
    ///
    /// Failures keep the previous payload.
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        self.state.loading = false;
        match result {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(err) => self.state.error = Some(err),
        }
    }

    /// Current state.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// URL of the latest request.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Number of requests issued so far.
    pub fn requests_issued(&self) -> u32 {
        self.requests_issued
    }
}

impl<T: DeserializeOwned> FetchAdapter<T> {
    /// Request `url` through `client` unless it is the URL last requested.
    pub async fn fetch<R: Transport>(
        &mut self,
        url: &str,
        client: &FetchClient<R>,
        tag: DependencyTag,
    ) -> &FetchState<T> {
        if let Some(url) = self.begin(url) {
            let result = client.get_json(&url, tag).await;
            self.resolve(result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::FakeTransport;
    use futures::executor::block_on;

    #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
    struct Page {
        total: u32,
    }

    fn client() -> FetchClient<FakeTransport> {
        FetchClient::new(
            FakeTransport::default()
                .with("/p?skip=0", 200, r#"{"total":30}"#)
                .with("/p?skip=10", 200, r#"{"total":31}"#)
                .with("/down", 503, ""),
        )
    }

    #[test]
    fn test_one_request_per_url() {
        let client = client();
        let mut adapter = FetchAdapter::<Page>::new();

        block_on(adapter.fetch("/p?skip=0", &client, DependencyTag::Catalog));
        block_on(adapter.fetch("/p?skip=0", &client, DependencyTag::Catalog));
        assert_eq!(client.transport().calls.borrow().len(), 1);
        assert_eq!(adapter.requests_issued(), 1);

        let state = block_on(adapter.fetch("/p?skip=10", &client, DependencyTag::Catalog));
        assert_eq!(state.data, Some(Page { total: 31 }));
        assert_eq!(client.transport().calls.borrow().len(), 2);
    }

    #[test]
    fn test_loading_only_while_outstanding() {
        let mut adapter = FetchAdapter::<Page>::new();
        assert!(!adapter.state().loading);

        assert_eq!(adapter.begin("/p?skip=0"), Some("/p?skip=0".to_string()));
        assert!(adapter.state().loading);
        assert_eq!(adapter.begin("/p?skip=0"), None);
        assert!(adapter.state().loading);

        adapter.resolve(Ok(Page { total: 30 }));
        assert!(!adapter.state().loading);
        assert_eq!(adapter.url(), Some("/p?skip=0"));
    }

    #[test]
    fn test_error_keeps_previous_data() {
        let client = client();
        let mut adapter = FetchAdapter::<Page>::new();
        block_on(adapter.fetch("/p?skip=0", &client, DependencyTag::Catalog));

        let state = block_on(adapter.fetch("/down", &client, DependencyTag::Catalog));
        assert!(matches!(state.error, Some(FetchError::Http { status: 503, .. })));
        assert_eq!(state.data, Some(Page { total: 30 }));
        assert!(!state.loading);
    }

    #[test]
    fn test_success_clears_error() {
        let client = client();
        let mut adapter = FetchAdapter::<Page>::new();
        block_on(adapter.fetch("/down", &client, DependencyTag::Catalog));
        assert!(adapter.state().error.is_some());
        assert!(adapter.state().data.is_none());

        block_on(adapter.fetch("/p?skip=0", &client, DependencyTag::Catalog));
        assert!(adapter.state().error.is_none());
    }

    #[test]
    fn test_late_response_overwrites_newer_request() {
        let mut adapter = FetchAdapter::<Page>::new();
        adapter.begin("/p?skip=0");
        adapter.begin("/p?skip=10");
        adapter.resolve(Ok(Page { total: 31 }));
        // The superseded request lands last and wins.
        adapter.resolve(Ok(Page { total: 30 }));

        assert_eq!(adapter.url(), Some("/p?skip=10"));
        assert_eq!(adapter.state().data, Some(Page { total: 30 }));
    }
}
