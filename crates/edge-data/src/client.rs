//! Outbound HTTP seam and JSON fetch client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::dependency::DependencyTag;

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues outbound GET requests.
///
/// Components run single-threaded, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url).await
    }
}

/// Spin outbound HTTP.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let req = spin_sdk::http::Request::builder()
            .method(spin_sdk::http::Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(HttpResponse::new(*resp.status(), resp.into_body()))
    }
}

/// Fetch client that decodes JSON bodies.
///
/// No retry, timeout or cancellation: one call, one request.
pub struct FetchClient<T> {
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    /// Create a client over a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// GET `url` and decode the body as `D`.
    ///
    /// Any status of 400 or above is an error; the body is not inspected.
    pub async fn get_json<D: DeserializeOwned>(
        &self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<D, FetchError> {
        let resp = self.transport.get(url).await?;

        if resp.status >= 400 {
            return Err(FetchError::Http {
                status: resp.status,
                url: url.to_string(),
            });
        }

        serde_json::from_slice(&resp.body)
            .map_err(|e| FetchError::Deserialization(format!("{} response: {}", tag, e)))
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
