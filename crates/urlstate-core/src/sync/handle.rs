//! Single-key view, for callers that only manage one parameter.

use anyhow::Result;

use super::UrlState;
use crate::router::Router;
use crate::value::StateValue;

/// Borrowed handle on one managed key of a [`UrlState`].
pub struct UrlKey<'a, R> {
    state: &'a mut UrlState<R>,
    key: String,
    default: StateValue,
}

impl<'a, R: Router> UrlKey<'a, R> {
    pub(super) fn new(state: &'a mut UrlState<R>, key: String, default: StateValue) -> Self {
        Self {
            state,
            key,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &StateValue {
        &self.default
    }

    pub fn get(&self) -> StateValue {
        self.state
            .get(&self.key)
            .unwrap_or_else(|| self.default.clone())
    }

    pub fn is_modified(&self) -> bool {
        self.get() != self.default
    }

    pub fn set(&mut self, value: impl Into<StateValue>) -> Result<()> {
        self.state.set(&self.key, value)
    }

    /// Set from the current value, e.g. `page.update(|p| ...)`.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(StateValue) -> StateValue,
    {
        let next = f(self.get());
        self.state.set(&self.key, next)
    }
}
