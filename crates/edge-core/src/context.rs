//! Request context with parsed query parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::lifecycle::TimingContext;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl RequestId {
    /// Generate a new request ID from the clock and a process-local sequence.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:08x}", nanos, seq))
    }

    /// Create from an existing ID string (e.g. an upstream `x-request-id`).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters. Later duplicates win.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers, keys lowercased.
pub type Headers = HashMap<String, String>;

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: http::Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from a method and a path that may carry a query string.
    pub fn new(method: http::Method, path_with_query: &str) -> Self {
        let mut parts = path_with_query.splitn(2, '?');
        let path = parts.next().unwrap_or("/").to_string();
        let query = parts.next().map(parse_query_string).unwrap_or_default();

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach headers. An `x-request-id` header replaces the generated ID.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (k, v) in headers {
            self.headers.insert(k.as_ref().to_ascii_lowercase(), v.into());
        }
        if let Some(id) = self.headers.get("x-request-id").filter(|id| !id.is_empty()) {
            self.request_id = RequestId::from_string(id.clone());
        }
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }
}

/// Parse an `application/x-www-form-urlencoded` string.
///
/// Used for both query strings and form bodies.
pub fn parse_query_string(qs: &str) -> QueryParams {
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = percent_decode(parts.next().unwrap_or(""));
            let value = percent_decode(parts.next().unwrap_or(""));
            (key, value)
        })
        .collect()
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Encode a string for use in a query string or form body.
///
/// Spaces become `+`.
pub fn percent_encode(s: &str) -> String {
    encode(s, "+")
}

/// Encode a string for use as one URL path segment.
///
/// Spaces become `%20`, since `+` is a literal plus in a path.
pub fn percent_encode_path_segment(s: &str) -> String {
    encode(s, "%20")
}

fn encode(s: &str, space: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            b' ' => result.push_str(space),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_splits_path_and_query() {
        let ctx = RequestContext::new(http::Method::GET, "/products?category=smartphones&page=2");
        assert_eq!(ctx.path, "/products");
        assert_eq!(ctx.query_param("category"), Some("smartphones"));
        assert_eq!(ctx.query_param("page"), Some("2"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let ctx = RequestContext::new(http::Method::GET, "/products")
            .with_headers([("Sec-CH-Viewport-Width", "390"), ("X-Request-Id", "abc")]);
        assert_eq!(ctx.header("sec-ch-viewport-width"), Some("390"));
        assert_eq!(ctx.request_id.to_string(), "abc");
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("mens-shirts"), "mens-shirts");
        assert_eq!(percent_decode("a+b%20c"), "a b c");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_percent_encode_decode() {
        let raw = r#"{"title":"Eyeshadow & Liner"}"#;
        assert_eq!(percent_decode(&percent_encode(raw)), raw);
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(percent_encode_path_segment("home decoration"), "home%20decoration");
        assert_eq!(percent_encode_path_segment("a/b+c"), "a%2Fb%2Bc");
        assert_eq!(percent_encode("home decoration"), "home+decoration");
        assert_eq!(percent_decode("home%20decoration"), "home decoration");
    }

    #[test]
    fn test_parse_form_body() {
        let form = parse_query_string("item=%7B%22id%22%3A1%7D&add=true&");
        assert_eq!(form.get("item").map(String::as_str), Some(r#"{"id":1}"#));
        assert_eq!(form.get("add").map(String::as_str), Some("true"));
        assert_eq!(form.len(), 2);
    }
}
