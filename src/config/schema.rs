//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the language router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Recognized language codes, in configuration order. Codes are opaque
    /// strings; no ISO validation is applied.
    pub languages: Vec<String>,

    /// Where the language lives in a URL:
    /// - `true`: leftmost host label (`en.example.com`)
    /// - `false`: first path segment (`example.com/en`)
    ///
    /// In subdomain mode the language label must be the leftmost one;
    /// `en.it.example.com` is recognized, `it.en.example.com` is not.
    pub language_subdomain: bool,

    /// Regex patterns applied to the request path info. A matching path is
    /// never language-tagged. The blacklist applies to parsing only, not to
    /// URL creation.
    pub blacklist: Vec<String>,

    /// Query parameter name that carries the detected/desired language.
    pub query_param: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            language_subdomain: false,
            blacklist: Vec::new(),
            query_param: default_query_param(),
        }
    }
}

fn default_query_param() -> String {
    "language".to_string()
}

/// The `languages` option: either a concrete list or a zero-argument
/// producer invoked exactly once during router construction.
///
/// After construction the router always holds a plain `Vec<String>`; the
/// producer variant never survives initialization.
pub enum LanguagesSource {
    /// A concrete list of language codes.
    List(Vec<String>),
    /// A producer evaluated once at initialization.
    Producer(Box<dyn FnOnce() -> Vec<String>>),
}

impl LanguagesSource {
    /// Wrap a producer function.
    pub fn producer<F>(f: F) -> Self
    where
        F: FnOnce() -> Vec<String> + 'static,
    {
        Self::Producer(Box::new(f))
    }

    /// Resolve to a concrete list, consuming the source.
    pub(crate) fn resolve(self) -> Vec<String> {
        match self {
            Self::List(languages) => languages,
            Self::Producer(f) => f(),
        }
    }
}

impl From<Vec<String>> for LanguagesSource {
    fn from(languages: Vec<String>) -> Self {
        Self::List(languages)
    }
}

impl From<Vec<&str>> for LanguagesSource {
    fn from(languages: Vec<&str>) -> Self {
        Self::List(languages.into_iter().map(str::to_string).collect())
    }
}

impl std::fmt::Debug for LanguagesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(languages) => f.debug_tuple("List").field(languages).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert!(config.languages.is_empty());
        assert!(!config.language_subdomain);
        assert!(config.blacklist.is_empty());
        assert_eq!(config.query_param, "language");
    }

    #[test]
    fn test_minimal_toml() {
        let config: RouterConfig = toml::from_str(r#"languages = ["en", "ru"]"#).unwrap();
        assert_eq!(config.languages, vec!["en", "ru"]);
        assert_eq!(config.query_param, "language");
    }

    #[test]
    fn test_full_toml() {
        let config: RouterConfig = toml::from_str(
            r#"
            languages = ["en", "ru"]
            language_subdomain = true
            blacklist = ["^api.*$"]
            query_param = "lang"
            "#,
        )
        .unwrap();
        assert!(config.language_subdomain);
        assert_eq!(config.blacklist, vec!["^api.*$"]);
        assert_eq!(config.query_param, "lang");
    }

    #[test]
    fn test_producer_resolves() {
        let source = LanguagesSource::producer(|| vec!["en".to_string()]);
        assert_eq!(source.resolve(), vec!["en"]);
    }
}
