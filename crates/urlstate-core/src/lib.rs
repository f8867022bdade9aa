//! Typed key/value state kept in a URL query string.
//!
//! A [`UrlState`] reads its values from a [`Router`]'s current query on every
//! call, coercing each parameter by the kind of its default, and turns writes
//! into push/replace navigations that leave unrelated parameters alone.

pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod query;
pub mod router;
pub mod sync;
pub mod value;

pub use defaults::DefaultMap;
pub use error::UrlStateError;
pub use query::QueryParams;
pub use router::{HistoryMode, Location, MemoryRouter, Router};
pub use sync::{StateMap, UrlKey, UrlState, UrlStateBuilder};
pub use value::{StateValue, ValueKind};
