//! The caller-supplied default map.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{StateValue, ValueKind};

/// Default value per managed key. The kind of each default is the kind the
/// key is read back as.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefaultMap(BTreeMap<String, StateValue>);

impl DefaultMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.0.get(key).map(StateValue::kind)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StateValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, StateValue> {
        &self.0
    }
}

impl From<BTreeMap<String, StateValue>> for DefaultMap {
    fn from(map: BTreeMap<String, StateValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<StateValue>> FromIterator<(K, V)> for DefaultMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
