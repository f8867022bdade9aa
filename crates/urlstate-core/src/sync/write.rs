//! Write and reset paths.

use anyhow::Result;

use super::UrlState;
use crate::query::QueryParams;
use crate::router::Router;
use crate::value::StateValue;

impl<R: Router> UrlState<R> {
    /// Set one key and navigate.
    pub fn set(&mut self, key: &str, value: impl Into<StateValue>) -> Result<()> {
        self.set_many([(key, value.into())])
    }

    /// Set several keys in one navigation.
    ///
    /// Keys without a default are dropped. Lists replace every existing
    /// occurrence of their key with one pair per element; scalars are
    /// stringified. Excluded keys never survive into the outgoing query.
    pub fn set_many<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StateValue>,
    {
        let mut query = self.router.query();
        for (key, value) in values {
            let key = key.as_ref();
            if !self.defaults.contains_key(key) {
                tracing::trace!(key, "ignoring write to unknown key");
                continue;
            }
            write_value(&mut query, key, &value.into());
        }
        self.strip_excluded(&mut query);
        self.navigate(&query)
    }

    /// Set `key` from its current value. Unknown keys are a no-op.
    pub fn update<F>(&mut self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(StateValue) -> StateValue,
    {
        match self.get(key) {
            Some(current) => self.set(key, f(current)),
            None => {
                tracing::trace!(key, "ignoring update of unknown key");
                Ok(())
            }
        }
    }

    /// Put every key back to its configured default.
    pub fn reset(&mut self) -> Result<()> {
        self.reset_with(std::iter::empty::<(&str, StateValue)>())
    }

    /// Reset with `overrides` laid over the configured defaults.
    ///
    /// List keys are cleared and re-filled with the effective value when it
    /// is non-empty. Scalar keys are removed from the query unless the
    /// effective value differs from the configured default, in which case
    /// they are set to it.
    pub fn reset_with<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StateValue>,
    {
        let mut effective = self.defaults.clone();
        for (key, value) in overrides {
            let key = key.as_ref();
            if self.defaults.contains_key(key) {
                effective.insert(key, value);
            }
        }

        let mut query = self.router.query();
        self.strip_excluded(&mut query);

        for (key, value) in effective.iter() {
            match value {
                StateValue::List(items) => {
                    query.delete(key);
                    for item in items {
                        query.append(key, item);
                    }
                }
                scalar if self.defaults.get(key) != Some(scalar) => {
                    query.set(key, &scalar.to_query_value());
                }
                _ => query.delete(key),
            }
        }

        // An override may name an excluded key.
        self.strip_excluded(&mut query);
        self.navigate(&query)
    }

    fn navigate(&mut self, query: &QueryParams) -> Result<()> {
        let href = self.href_for(query);
        tracing::debug!(href = %href, mode = ?self.history, "url state navigation");
        self.router.navigate(self.history, &href)
    }
}

fn write_value(query: &mut QueryParams, key: &str, value: &StateValue) {
    match value {
        StateValue::List(items) => {
            query.delete(key);
            for item in items {
                query.append(key, item);
            }
        }
        scalar => query.set(key, &scalar.to_query_value()),
    }
}
