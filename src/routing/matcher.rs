//! Blacklist matching logic.
//!
//! # Responsibilities
//! - Match request path info against configured blacklist patterns
//! - Combine patterns with OR semantics (first match wins)
//!
//! # Design Decisions
//! - Path info is matched with a leading `/` trimmed off
//! - Patterns compile once at construction; matching allocates nothing
//! - The blacklist applies to request parsing only, never to created URLs

use regex::Regex;

use crate::config::ConfigError;

/// Trait for matching a request path against one blacklist condition.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path against a regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile a pattern into a matcher.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::Blacklist {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl PathMatcher for RegexMatcher {
    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// An ordered set of path matchers with OR semantics.
#[derive(Debug, Default)]
pub struct Blacklist {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl Blacklist {
    /// Compile a list of regex patterns into a blacklist.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut matchers: Vec<Box<dyn PathMatcher>> = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            matchers.push(Box::new(RegexMatcher::new(pattern)?));
        }
        Ok(Self { matchers })
    }

    /// Build a blacklist from pre-constructed matchers.
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }

    /// Returns true if the path info matches any blacklist condition.
    /// A leading `/` is ignored.
    pub fn is_match(&self, path_info: &str) -> bool {
        let path = path_info.trim_start_matches('/');
        self.matchers.iter().any(|m| m.matches(path))
    }

    /// Whether the blacklist has no conditions.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
