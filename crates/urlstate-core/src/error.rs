//! Errors raised by the synchronizer itself.
//!
//! Navigation failures are not wrapped here: they come back from the router
//! as-is through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlStateError {
    /// `build()` was called without a default map.
    #[error("no default values supplied; a default map is required")]
    MissingDefaults,

    /// A single-key handle was requested for a key with no default.
    #[error("unknown key `{0}`: not present in the default map")]
    UnknownKey(String),
}
