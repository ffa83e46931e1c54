//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (host, path info, params)
//!     → router.rs (language detection + strip, blacklist gate)
//!     → base.rs (delegate to the generic pretty-URL engine)
//!     → Return: matched RouteResult or None
//!
//! Outbound URL (route name + params, optional language override)
//!     → base.rs (language-agnostic URL)
//!     → router.rs (language re-embedded into path or host)
//!     → Return: final URL string
//! ```
//!
//! # Design Decisions
//! - Languages and blacklist compiled at construction, immutable at runtime
//! - Deterministic: same request always parses the same way
//! - The blacklist gates parsing only, never URL creation

pub mod base;
pub mod matcher;
pub mod router;

pub use base::{BaseRouter, RouteResult, UrlParams};
pub use matcher::{Blacklist, PathMatcher, RegexMatcher};
pub use router::LanguageRouter;
