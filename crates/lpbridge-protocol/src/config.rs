use lpbridge_model::VariableLimit;

use crate::bounds::UnusedBound;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const DEFAULT_FORMAT_VERSION: &str = "GLPK_1.0";
pub const DEFAULT_SOURCE: &str = "linear_optimization_frontend";

/// Settings for a solving session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Base URL of the solver service
    pub endpoint: String,
    pub variable_limit: VariableLimit,
    pub unused_bound: UnusedBound,
    /// Drop the current result whenever the variable count changes
    pub invalidate_on_resize: bool,
    pub format_version: String,
    pub source: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            variable_limit: VariableLimit::default(),
            unused_bound: UnusedBound::default(),
            invalidate_on_resize: true,
            format_version: DEFAULT_FORMAT_VERSION.to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_variable_limit(mut self, limit: VariableLimit) -> Self {
        self.variable_limit = limit;
        self
    }

    pub fn with_unused_bound(mut self, unused: UnusedBound) -> Self {
        self.unused_bound = unused;
        self
    }

    pub fn with_invalidate_on_resize(mut self, invalidate: bool) -> Self {
        self.invalidate_on_resize = invalidate;
        self
    }

    pub fn with_format_version(mut self, version: impl Into<String>) -> Self {
        self.format_version = version.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Full URL for a solve in the given sense
    pub fn solve_url(&self, maximize: bool) -> String {
        let path = if maximize {
            "getMaximization"
        } else {
            "getMinimization"
        };
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }
}
