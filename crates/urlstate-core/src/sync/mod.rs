//! URL state synchronizer: a typed key/value view over the router's query.
//!
//! Nothing is cached. Every read re-derives state from the router's current
//! query and the default map; every write builds a new query from the current
//! one and hands the resulting href to the router.

mod handle;
mod write;


use std::collections::BTreeMap;

use crate::config::UrlStateConfig;
use crate::defaults::DefaultMap;
use crate::error::UrlStateError;
use crate::query::QueryParams;
use crate::router::{HistoryMode, Router};
use crate::value::{parse_scalar, StateValue};

pub use handle::UrlKey;

/// Derived state: one entry per key in the default map.
pub type StateMap = BTreeMap<String, StateValue>;

/// Builder for [`UrlState`]. `defaults` is the only required setting.
pub struct UrlStateBuilder<R> {
    router: R,
    defaults: Option<DefaultMap>,
    exclude: Vec<String>,
    history: HistoryMode,
}

impl<R: Router> UrlStateBuilder<R> {
    pub fn defaults(mut self, defaults: impl Into<DefaultMap>) -> Self {
        self.defaults = Some(defaults.into());
        self
    }

    /// Keys stripped from every outgoing query.
    pub fn exclude<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn history(mut self, mode: HistoryMode) -> Self {
        self.history = mode;
        self
    }

    /// Shorthand for `history(Replace)` when `replace` is true.
    pub fn replace(self, replace: bool) -> Self {
        let mode = if replace {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        self.history(mode)
    }

    /// Apply defaults, exclusions and history mode from a loaded config.
    pub fn config(self, cfg: &UrlStateConfig) -> anyhow::Result<Self> {
        let defaults = cfg.default_map()?;
        Ok(self
            .defaults(defaults)
            .exclude(cfg.exclude.iter().cloned())
            .history(cfg.history))
    }

    pub fn build(self) -> Result<UrlState<R>, UrlStateError> {
        let defaults = self.defaults.ok_or(UrlStateError::MissingDefaults)?;
        tracing::debug!(
            keys = defaults.len(),
            excluded = self.exclude.len(),
            history = ?self.history,
            "url state synchronizer ready"
        );
        Ok(UrlState {
            router: self.router,
            defaults,
            exclude: self.exclude,
            history: self.history,
        })
    }
}

/// Typed view over the query string of a [`Router`].
pub struct UrlState<R> {
    router: R,
    defaults: DefaultMap,
    exclude: Vec<String>,
    history: HistoryMode,
}

impl<R: Router> UrlState<R> {
    pub fn builder(router: R) -> UrlStateBuilder<R> {
        UrlStateBuilder {
            router,
            defaults: None,
            exclude: Vec::new(),
            history: HistoryMode::default(),
        }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    pub fn into_router(self) -> R {
        self.router
    }

    pub fn defaults(&self) -> &DefaultMap {
        &self.defaults
    }

    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history
    }

    /// Current typed state, read fresh from the router.
    ///
    /// List keys collect every occurrence; scalar keys take the first one.
    /// A key that is absent (or, for scalars, present but empty) reads as its
    /// default. Present values are coerced by the default's kind.
    pub fn state(&self) -> StateMap {
        let query = self.router.query();
        self.defaults
            .iter()
            .map(|(key, default)| (key.to_string(), read_value(&query, key, default)))
            .collect()
    }

    /// Current value of one key, or `None` if the key has no default.
    pub fn get(&self, key: &str) -> Option<StateValue> {
        let default = self.defaults.get(key)?;
        Some(read_value(&self.router.query(), key, default))
    }

    /// Whether the current state differs from the defaults.
    ///
    /// Both sides are compared in their JSON form, so `NaN` reads as `null`
    /// exactly as a browser would serialize it. Keys are map-keyed on both
    /// sides, so ordering never matters.
    pub fn is_modified(&self) -> bool {
        let current = serde_json::to_value(self.state()).ok();
        let defaults = serde_json::to_value(&self.defaults).ok();
        current != defaults
    }

    /// Keys whose current value differs from their default.
    pub fn modified_values(&self) -> StateMap {
        self.state()
            .into_iter()
            .filter(|(key, value)| self.defaults.get(key) != Some(value))
            .collect()
    }

    /// Single-key handle for `key`.
    pub fn key(&mut self, key: &str) -> Result<UrlKey<'_, R>, UrlStateError> {
        let default = self
            .defaults
            .get(key)
            .cloned()
            .ok_or_else(|| UrlStateError::UnknownKey(key.to_string()))?;
        Ok(UrlKey::new(self, key.to_string(), default))
    }

    /// Navigation target for `query` on the current pathname.
    pub fn href_for(&self, query: &QueryParams) -> String {
        let pathname = self.router.pathname();
        if query.is_empty() {
            pathname
        } else {
            format!("{pathname}?{query}")
        }
    }

    fn strip_excluded(&self, query: &mut QueryParams) {
        for key in &self.exclude {
            query.delete(key);
        }
    }
}

fn read_value(query: &QueryParams, key: &str, default: &StateValue) -> StateValue {
    if default.is_list() {
        let all = query.get_all(key);
        if all.is_empty() {
            return default.clone();
        }
        return StateValue::List(all.into_iter().map(str::to_string).collect());
    }
    match query.get(key) {
        Some(raw) if !raw.is_empty() => parse_scalar(raw, default.kind()),
        _ => default.clone(),
    }
}
