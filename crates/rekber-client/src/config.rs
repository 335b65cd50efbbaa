//! Client configuration.

/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API (e.g. `http://localhost:4000`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let config = ApiConfig::new("http://localhost:4000");
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn timeout_override() {
        let config = ApiConfig::new("http://localhost:4000").with_timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
