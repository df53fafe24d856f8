use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{META_RUN_NUMBER, RunNumber};

/// Key–value metadata attached to stored objects.
///
/// Ordered, so that request paths built from it are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Metadata carrying only `runNumber=<run>`.
    pub fn for_run(run: RunNumber) -> Self {
        Self::single(META_RUN_NUMBER, run.to_string())
    }

    pub fn single<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut m = Self::new();
        m.insert(key, value);
        m
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_run_sets_run_number_string() {
        let m = Metadata::for_run(527349);
        assert_eq!(m.get("runNumber"), Some("527349"));
        assert_eq!(m.iter().count(), 1);
    }

    #[test]
    fn insert_overrides_and_iterates_sorted() {
        let mut m = Metadata::single("b", "1");
        m.insert("a", "2");
        m.insert("b", "3");
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![("a", "2"), ("b", "3")]);
    }
}
