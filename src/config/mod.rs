//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or in-code RouterConfig
//!     → loader.rs (parse & deserialize)
//!     → loader.rs::validate_config (semantic checks)
//!     → RouterConfig (validated)
//!     → LanguageRouter::new (blacklist compiled, languages resolved)
//!     → frozen for the router's lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a router is constructed
//! - All fields have defaults to allow minimal configs
//! - The `languages` option accepts a producer function, resolved exactly
//!   once at construction; afterwards only the concrete list exists

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{LanguagesSource, RouterConfig};
