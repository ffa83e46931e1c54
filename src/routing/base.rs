//! Contract with the underlying pretty-URL engine.
//!
//! # Responsibilities
//! - Define the seam between the language layer and the generic router
//! - Carry route-match results and URL-creation parameters
//!
//! # Design Decisions
//! - Explicit `None` for "no match"; rejection is never an error value
//! - `UrlParams` keeps insertion order (route name first, then named params)

use crate::config::ConfigError;
use crate::http::RequestContext;

/// The generic match/build engine the language router wraps.
///
/// Implementations match a language-agnostic path to a route and build
/// language-agnostic URLs, honoring an application-level base path.
pub trait BaseRouter {
    /// Base initialization. The default is a no-op; implementations that can
    /// be misconfigured fail here.
    fn init(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Whether pretty-URL generation is enabled. The language router
    /// requires it.
    fn pretty_url_enabled(&self) -> bool;

    /// Match the request's path info to a route, or `None` on no match.
    fn parse_request(&self, request: &mut RequestContext) -> Option<RouteResult>;

    /// Build a path for the given route and parameters, prefixed with the
    /// application base path. No scheme or host.
    fn create_url(&self, params: &UrlParams) -> String;

    /// The application base path prefix (e.g. `/admin`, or `""`).
    fn base_url(&self) -> &str;
}

/// A matched route: its name plus any parameters bound during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub route: String,
    pub params: Vec<(String, String)>,
}

impl RouteResult {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: Vec::new(),
        }
    }
}

/// Parameters for URL creation: a route name followed by named parameters,
/// in insertion order.
///
/// The language parameter (under the router's configured query-param name)
/// may be included to force a specific language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    route: String,
    params: Vec<(String, String)>,
}

impl UrlParams {
    /// Start building parameters for the named route.
    pub fn route(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: Vec::new(),
        }
    }

    /// Append a named parameter (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// The route name.
    pub fn route_name(&self) -> &str {
        &self.route
    }

    /// Look up a named parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove a named parameter, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.params.iter().position(|(key, _)| key == name)?;
        Some(self.params.remove(index).1)
    }

    /// Iterate over the named parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_params_order_preserved() {
        let params = UrlParams::route("site/index")
            .with("page", "2")
            .with("sort", "name");
        let collected: Vec<_> = params.iter().collect();
        assert_eq!(collected, vec![("page", "2"), ("sort", "name")]);
    }

    #[test]
    fn test_remove_extracts_language_override() {
        let mut params = UrlParams::route("site/index")
            .with("language", "en")
            .with("page", "2");
        assert_eq!(params.remove("language").as_deref(), Some("en"));
        assert_eq!(params.remove("language"), None);
        assert_eq!(params.get("page"), Some("2"));
    }
}
