//! Named scalar fields.

use std::collections::BTreeMap;

use pf_core::Real;

use crate::error::PhaseResult;
use crate::key::PropKey;

/// A map of property key -> values.
///
/// The store checks keys but not lengths; owners (`Phase`, `Geometry`)
/// know the entity counts and validate shapes before inserting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyStore {
    fields: BTreeMap<String, Vec<Real>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning the previous values.
    pub fn insert(&mut self, key: &str, values: Vec<Real>) -> PhaseResult<Option<Vec<Real>>> {
        let key = PropKey::parse(key)?;
        Ok(self.fields.insert(key.to_string(), values))
    }

    pub fn get(&self, key: &str) -> Option<&[Real]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<Real>> {
        self.fields.remove(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut store = PropertyStore::new();
        assert!(store.insert("pore.volume", vec![1.0, 2.0]).unwrap().is_none());
        assert_eq!(store.get("pore.volume"), Some(&[1.0, 2.0][..]));

        let old = store.insert("pore.volume", vec![3.0]).unwrap();
        assert_eq!(old, Some(vec![1.0, 2.0]));

        assert_eq!(store.remove("pore.volume"), Some(vec![3.0]));
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_malformed_key() {
        let mut store = PropertyStore::new();
        assert!(store.insert("volume", vec![1.0]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let mut store = PropertyStore::new();
        store.insert("throat.b", vec![]).unwrap();
        store.insert("pore.a", vec![]).unwrap();
        let keys: Vec<_> = store.keys().collect();
        assert_eq!(keys, vec!["pore.a", "throat.b"]);
    }
}
