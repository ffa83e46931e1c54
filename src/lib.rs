//! URL router that carries a language code in the request path or subdomain.
//!
//! Wraps a generic pretty-URL engine (the [`BaseRouter`] trait) and handles
//! the language either as the first path segment (`example.com/en/site/index`)
//! or as the leftmost host label (`en.example.com/site/index`). Parsing
//! strips the language and exposes it as a query parameter; URL creation
//! re-embeds the current or an explicitly requested language.
//!
//! ```
//! use language_router::{
//!     BaseRouter, LanguageRouter, RequestContext, RouteResult, RouterConfig, UrlParams,
//! };
//!
//! # #[derive(Debug)]
//! # struct Engine;
//! # impl BaseRouter for Engine {
//! #     fn pretty_url_enabled(&self) -> bool { true }
//! #     fn parse_request(&self, request: &mut RequestContext) -> Option<RouteResult> {
//! #         Some(RouteResult::new(request.path_info().trim_matches('/')))
//! #     }
//! #     fn create_url(&self, params: &UrlParams) -> String {
//! #         format!("/{}", params.route_name())
//! #     }
//! #     fn base_url(&self) -> &str { "" }
//! # }
//! let config = RouterConfig {
//!     languages: vec!["en".to_string(), "ru".to_string()],
//!     ..RouterConfig::default()
//! };
//! let router = LanguageRouter::new(Engine, config).unwrap();
//!
//! let mut request = RequestContext::new("http://example.com", "en/site/index");
//! let route = router.parse_request(&mut request).unwrap();
//! assert_eq!(route.route, "site/index");
//! assert_eq!(request.query_param("language"), Some("en"));
//!
//! let url = router.create_url(&request, UrlParams::route("site/index"));
//! assert_eq!(url, "/en/site/index");
//! ```

pub mod config;
pub mod http;
pub mod routing;

pub use config::{load_config, ConfigError, LanguagesSource, RouterConfig};
pub use http::RequestContext;
pub use routing::{BaseRouter, LanguageRouter, RouteResult, UrlParams};
