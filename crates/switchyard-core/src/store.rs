//! Flat key-value persistence store for suspend/resume snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A flat string-keyed bag of booleans and integers.
///
/// Reads return `None` for missing keys and for keys holding the other type;
/// the `get_*` helpers apply an explicit default.
pub trait PersistenceStore {
    /// Store a boolean.
    fn put_bool(&mut self, key: &str, value: bool);

    /// Store an integer.
    fn put_int(&mut self, key: &str, value: i32);

    /// Read a boolean.
    fn read_bool(&self, key: &str) -> Option<bool>;

    /// Read an integer.
    fn read_int(&self, key: &str) -> Option<i32>;

    /// Read a boolean, falling back to `default`.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.read_bool(key).unwrap_or(default)
    }

    /// Read an integer, falling back to `default`.
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.read_int(key).unwrap_or(default)
    }
}

/// A stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleValue {
    /// Boolean entry
    Bool(bool),
    /// Integer entry
    Int(i32),
}

/// Error raised when a bundle cannot be encoded or decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory [`PersistenceStore`], serializable as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: BTreeMap<String, BundleValue>,
}

impl Bundle {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PersistenceStore::put_bool`].
    #[must_use]
    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.put_bool(key, value);
        self
    }

    /// Builder form of [`PersistenceStore::put_int`].
    #[must_use]
    pub fn with_int(mut self, key: &str, value: i32) -> Self {
        self.put_int(key, value);
        self
    }

    /// Whether `key` holds any value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<BundleValue> {
        self.entries.get(key).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Encode as a JSON object.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PersistenceStore for Bundle {
    fn put_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_owned(), BundleValue::Bool(value));
    }

    fn put_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_owned(), BundleValue::Int(value));
    }

    fn read_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            BundleValue::Bool(v) => Some(v),
            BundleValue::Int(_) => None,
        }
    }

    fn read_int(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            BundleValue::Int(v) => Some(v),
            BundleValue::Bool(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_put_and_get() {
        let mut bundle = Bundle::new();
        bundle.put_bool("a", true);
        bundle.put_int("b", -7);

        assert_eq!(bundle.read_bool("a"), Some(true));
        assert_eq!(bundle.read_int("b"), Some(-7));
        assert_eq!(bundle.len(), 2);
        assert!(bundle.contains_key("a"));
    }

    #[test]
    fn test_bundle_defaults_for_missing_and_mistyped() {
        let bundle = Bundle::new().with_int("n", 3);
        assert!(bundle.get_bool("missing", true));
        assert_eq!(bundle.get_int("missing", 42), 42);
        assert!(!bundle.get_bool("n", false));
        assert_eq!(bundle.read_bool("n"), None);
    }

    #[test]
    fn test_bundle_overwrite_changes_type() {
        let bundle = Bundle::new().with_int("k", 1).with_bool("k", false);
        assert_eq!(bundle.get("k"), Some(BundleValue::Bool(false)));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_bundle_json_is_flat_object() {
        let bundle = Bundle::new().with_bool("checked", true).with_int("color", -1);
        let json = bundle.to_json().unwrap();
        assert_eq!(json, r#"{"checked":true,"color":-1}"#);
        assert_eq!(Bundle::from_json(&json).unwrap(), bundle);
    }

    #[test]
    fn test_bundle_from_json_rejects_nested_values() {
        let err = Bundle::from_json(r#"{"checked":{"x":1}}"#).unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_bundle_keys_sorted() {
        let bundle = Bundle::new().with_bool("b", true).with_bool("a", false);
        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
