//! Language detection and re-embedding around the base router.
//!
//! # Responsibilities
//! - Strip a configured language from the first path segment or the
//!   leftmost host label, tagging the request with one query parameter
//! - Re-embed the current or requested language when building URLs
//! - Gate language tagging with the blacklist (parsing only)
//!
//! # Design Decisions
//! - The current request is an explicit argument to `create_url`; nothing
//!   is read from ambient global state
//! - Blacklist semantics differ by mode on purpose: path mode falls through
//!   untagged, subdomain mode rejects the request outright
//! - In subdomain mode only the leftmost label is inspected;
//!   `it.en.example.com` carries no language

use crate::config::{ConfigError, LanguagesSource, RouterConfig};
use crate::http::RequestContext;
use crate::routing::base::{BaseRouter, RouteResult, UrlParams};
use crate::routing::matcher::Blacklist;

const SEPARATOR_HOST: &str = ".";
const SEPARATOR_PATH: char = '/';
const DOMAIN_WWW: &str = "www";

/// Parses and creates URLs containing languages, delegating the
/// language-agnostic part to a [`BaseRouter`].
///
/// Immutable after construction; safe for unsynchronized concurrent reads.
#[derive(Debug)]
pub struct LanguageRouter<B> {
    base: B,
    languages: Vec<String>,
    subdomain_mode: bool,
    blacklist: Blacklist,
    query_param: String,
}

impl<B: BaseRouter> LanguageRouter<B> {
    /// Construct a router from a validated configuration.
    ///
    /// Fails with [`ConfigError::PrettyUrlRequired`] if the base router does
    /// not generate pretty URLs, with [`ConfigError::Blacklist`] on an
    /// invalid blacklist pattern, and propagates `base.init()` failures.
    pub fn new(base: B, mut config: RouterConfig) -> Result<Self, ConfigError> {
        let languages = LanguagesSource::List(std::mem::take(&mut config.languages));
        Self::with_languages(base, config, languages)
    }

    /// Construct a router with an explicit languages source, overriding
    /// `config.languages`. A [`LanguagesSource::Producer`] is invoked exactly
    /// once, here; the router stores only the resulting list.
    pub fn with_languages(
        mut base: B,
        config: RouterConfig,
        languages: impl Into<LanguagesSource>,
    ) -> Result<Self, ConfigError> {
        let languages = languages.into().resolve();

        if !base.pretty_url_enabled() {
            return Err(ConfigError::PrettyUrlRequired);
        }

        let blacklist = Blacklist::compile(&config.blacklist)?;
        base.init()?;

        Ok(Self {
            base,
            languages,
            subdomain_mode: config.language_subdomain,
            blacklist,
            query_param: config.query_param,
        })
    }

    /// The resolved language codes.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The query parameter name carrying the language.
    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// The wrapped base router.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Match a request, extracting the language first.
    ///
    /// Path mode: if the first path segment is a configured language it is
    /// stripped and written to the query-parameter bag, unless the stripped
    /// path is blacklisted, in which case the request is delegated untouched.
    /// The strip is a character-set left-trim rather than a segment splice,
    /// kept for parity with existing deployments; the following `/` always
    /// terminates the trim, so the two only differ for degenerate codes.
    ///
    /// Subdomain mode: the leftmost host label is the candidate. A
    /// blacklisted path under a language subdomain rejects the request
    /// (`None`) instead of falling through.
    pub fn parse_request(&self, request: &mut RequestContext) -> Option<RouteResult> {
        if !self.subdomain_mode {
            let path_info = request.path_info().to_string();
            let language = path_info
                .split(SEPARATOR_PATH)
                .next()
                .unwrap_or_default()
                .to_string();

            if self.is_language(&language) {
                let stripped = path_info
                    .trim_start_matches(|c| language.contains(c))
                    .to_string();

                if self.blacklist.is_match(&stripped) {
                    tracing::debug!(
                        path = %path_info,
                        language = %language,
                        "blacklisted path, language left in place"
                    );
                } else {
                    tracing::debug!(language = %language, path = %stripped, "language stripped from path");
                    request.set_path_info(stripped);
                    request.set_query_param(&self.query_param, &language);
                }
            }

            self.base.parse_request(request)
        } else {
            let labels = self.host_labels(request);
            let language = labels.into_iter().next().unwrap_or_default();

            if !self.is_language(&language) {
                return self.base.parse_request(request);
            }

            if self.blacklist.is_match(request.path_info()) {
                tracing::warn!(
                    host = %request.host_info(),
                    path = %request.path_info(),
                    "blacklisted path on language subdomain, request rejected"
                );
                return None;
            }

            request.set_query_param(&self.query_param, &language);
            self.base.parse_request(request)
        }
    }

    /// Build a URL, re-embedding a language.
    ///
    /// Path mode: the language comes from `params` (under the configured
    /// query-param name) or falls back to the current request's parameter;
    /// it is inserted between the application base path and the route path.
    ///
    /// Subdomain mode: only an explicit `params` entry selects a language
    /// (no request fallback). The current host is rewritten: a leading `www`
    /// is dropped, a leftmost language label is replaced, anything else gets
    /// the language prepended. The scheme follows the request's secure flag.
    ///
    /// A language that is not configured (or absent) yields the base
    /// router's URL unchanged, in both modes.
    pub fn create_url(&self, request: &RequestContext, mut params: UrlParams) -> String {
        if !self.subdomain_mode {
            let language = params
                .remove(&self.query_param)
                .or_else(|| request.query_param(&self.query_param).map(str::to_string));
            let url = self.base.create_url(&params);

            match language {
                Some(language) if self.is_language(&language) => {
                    let base_url = self.base.base_url();
                    let route_path = url
                        .strip_prefix(base_url)
                        .unwrap_or(&url)
                        .trim_start_matches(SEPARATOR_PATH);
                    format!("{}/{}/{}", base_url, language, route_path)
                }
                _ => url,
            }
        } else {
            match params.remove(&self.query_param) {
                Some(language) if self.is_language(&language) => {
                    let mut labels = self.host_labels(request);
                    if labels.first().map(String::as_str) == Some(DOMAIN_WWW) {
                        labels.remove(0);
                    }
                    match labels.first() {
                        Some(first) if self.is_language(first) => labels[0] = language,
                        _ => labels.insert(0, language),
                    }

                    let scheme = if request.is_secure_connection() {
                        "https"
                    } else {
                        "http"
                    };
                    let host = labels.join(SEPARATOR_HOST);
                    let url = self.base.create_url(&params);
                    format!("{}://{}{}", scheme, host, url)
                }
                _ => self.base.create_url(&params),
            }
        }
    }

    fn is_language(&self, candidate: &str) -> bool {
        self.languages.iter().any(|l| l == candidate)
    }

    /// The current host split into labels, leftmost (most specific) first.
    /// A missing or unparseable host yields no labels.
    fn host_labels(&self, request: &RequestContext) -> Vec<String> {
        match request.host() {
            Some(host) => host.split(SEPARATOR_HOST).map(str::to_string).collect(),
            None => Vec::new(),
        }
    }
}
