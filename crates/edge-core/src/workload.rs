//! Workload manifest and route table.

use serde::{Deserialize, Serialize};

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exact path this route serves (e.g., "/products").
    pub pattern: String,
    /// Handler name, used for logging.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new GET route.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Whether this route serves `path`, ignoring any query string and a
    /// trailing slash.
    pub fn matches_path(&self, path: &str) -> bool {
        let path = path.split('?').next().unwrap_or("");
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        path == self.pattern
    }

    /// Whether this route accepts `method`.
    pub fn allows(&self, method: &http::Method) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method.as_str()))
    }
}

/// Outcome of resolving a request against a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// Path and method both match.
    Found(&'a RouteConfig),
    /// Path matches but the method is not allowed.
    MethodNotAllowed,
    /// No route serves the path.
    NotFound,
}

/// Workload manifest - explicit configuration for a deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles.
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve a request to a route.
    pub fn resolve(&self, method: &http::Method, path: &str) -> RouteMatch<'_> {
        let mut path_seen = false;
        for route in self.routes.iter().filter(|r| r.matches_path(path)) {
            path_seen = true;
            if route.allows(method) {
                return RouteMatch::Found(route);
            }
        }
        if path_seen {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}
