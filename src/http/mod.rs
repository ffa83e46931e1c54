//! HTTP-facing types.
//!
//! # Data Flow
//! ```text
//! Host environment (per inbound request)
//!     → request.rs (RequestContext: host, path info, params, secure flag)
//!     → routing layer reads host/path, strips the language, tags one param
//!     → host environment continues with the modified context
//! ```

pub mod request;

pub use request::RequestContext;
