//! Per-request view of the data the router reads and writes.
//!
//! # Responsibilities
//! - Carry routing-relevant request state (host, path info, secure flag)
//! - Hold the mutable query-parameter bag the router tags with a language
//!
//! # Design Decisions
//! - Owned value passed explicitly; the router never reads ambient state
//! - Malformed host info yields `None` from `host()`, never an error

use std::collections::HashMap;

use url::Url;

/// Mutable per-request context.
///
/// The host environment creates one of these per inbound request (and passes
/// the current one when building URLs). The router only reads the host and
/// path, rewrites the path info, and writes one query parameter.
#[derive(Debug, Clone)]
pub struct RequestContext {
    path_info: String,
    host_info: String,
    query_params: HashMap<String, String>,
    secure: bool,
}

impl RequestContext {
    /// Create a context for an insecure connection.
    ///
    /// `host_info` is the full `scheme://host[:port]` prefix; `path_info` is
    /// the path after the application base path, without a leading slash.
    pub fn new(host_info: impl Into<String>, path_info: impl Into<String>) -> Self {
        Self {
            path_info: path_info.into(),
            host_info: host_info.into(),
            query_params: HashMap::new(),
            secure: false,
        }
    }

    /// Set the secure-transport flag (builder style).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// The path after the application base path.
    pub fn path_info(&self) -> &str {
        &self.path_info
    }

    /// Replace the path info (used when the language segment is stripped).
    pub fn set_path_info(&mut self, path_info: impl Into<String>) {
        self.path_info = path_info.into();
    }

    /// The `scheme://host[:port]` prefix of the current request.
    pub fn host_info(&self) -> &str {
        &self.host_info
    }

    /// The bare host name, parsed out of the host info.
    ///
    /// Returns `None` when the host info is absent or unparseable; callers
    /// treat that as "no language present", not as a failure.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.host_info)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }

    /// Whether the request arrived over a secure transport.
    pub fn is_secure_connection(&self) -> bool {
        self.secure
    }

    /// Read a single query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    /// Write a single query parameter.
    pub fn set_query_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.query_params.insert(name.into(), value.into());
    }

    /// The full query-parameter bag.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Replace the full query-parameter bag.
    pub fn set_query_params(&mut self, params: HashMap<String, String>) {
        self.query_params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_parsed_from_host_info() {
        let request = RequestContext::new("http://en.example.com", "site/index");
        assert_eq!(request.host().as_deref(), Some("en.example.com"));
    }

    #[test]
    fn test_host_with_port() {
        let request = RequestContext::new("https://example.com:8443", "");
        assert_eq!(request.host().as_deref(), Some("example.com"));
    }

    #[test]
    fn test_malformed_host_info_is_none() {
        let request = RequestContext::new("not a url", "site/index");
        assert_eq!(request.host(), None);

        let request = RequestContext::new("", "site/index");
        assert_eq!(request.host(), None);
    }

    #[test]
    fn test_query_param_roundtrip() {
        let mut request = RequestContext::new("http://example.com", "");
        assert_eq!(request.query_param("language"), None);
        request.set_query_param("language", "en");
        assert_eq!(request.query_param("language"), Some("en"));
    }

    #[test]
    fn test_query_param_bag_replacement() {
        let mut request = RequestContext::new("http://example.com", "");
        request.set_query_param("language", "en");

        let mut params = request.query_params().clone();
        params.insert("page".to_string(), "2".to_string());
        request.set_query_params(params);

        assert_eq!(request.query_param("language"), Some("en"));
        assert_eq!(request.query_param("page"), Some("2"));
    }
}
