//! Shared fixtures for the integration suite.

use language_router::{
    BaseRouter, RequestContext, RouteResult, RouterConfig, UrlParams,
};

/// Initialize the tracing subscriber once for the whole suite.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "language_router=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A stand-in for the generic pretty-URL engine.
///
/// Routes are path infos with surrounding slashes trimmed; created URLs are
/// `base_url + "/" + route`, with remaining parameters appended as a query
/// string.
#[derive(Debug)]
pub struct MockBaseRouter {
    base_url: String,
    pretty_urls: bool,
}

impl MockBaseRouter {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            pretty_urls: true,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            pretty_urls: true,
        }
    }
}

impl Default for MockBaseRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseRouter for MockBaseRouter {
    fn pretty_url_enabled(&self) -> bool {
        self.pretty_urls
    }

    fn parse_request(&self, request: &mut RequestContext) -> Option<RouteResult> {
        Some(RouteResult::new(request.path_info().trim_matches('/')))
    }

    fn create_url(&self, params: &UrlParams) -> String {
        let mut url = format!("{}/{}", self.base_url, params.route_name());
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Default router configuration: `en` and `ru`, path mode, no blacklist.
pub fn config(languages: &[&str]) -> RouterConfig {
    RouterConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        ..RouterConfig::default()
    }
}

/// Default request: `www.example.com`, path `site/index`, insecure.
pub fn request(path_info: &str) -> RequestContext {
    RequestContext::new("http://www.example.com", path_info)
}

/// Request arriving on a specific host.
pub fn request_on(host_info: &str, path_info: &str) -> RequestContext {
    RequestContext::new(host_info, path_info)
}
