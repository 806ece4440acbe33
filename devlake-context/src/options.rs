//! Free-form pipeline options.
//!
//! Options are a string-keyed map of JSON values handed to every stage of a
//! pipeline invocation. The map is shared, not copied: cloning [`Options`]
//! hands out another reference to the same entries.
//!
//! Recognized keys:
//!
//! | key | type | meaning |
//! |---|---|---|
//! | [`INCREMENTAL_KEY`] | boolean | enables incremental extraction mode |

use crate::errors::ContextError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Key enabling incremental extraction mode.
pub const INCREMENTAL_KEY: &str = "incremental";

/// A shared, read-only map of pipeline options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: Arc<serde_json::Map<String, serde_json::Value>>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options from an existing JSON map.
    #[must_use]
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            entries: Arc::new(map),
        }
    }

    /// Creates options from an arbitrary JSON value.
    ///
    /// `null` normalizes to empty options.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::InvalidOptions` for anything other than an
    /// object or `null`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ContextError> {
        match value {
            serde_json::Value::Object(map) => Ok(Self::from_map(map)),
            serde_json::Value::Null => Ok(Self::new()),
            other => Err(ContextError::invalid_options(&other)),
        }
    }

    /// Parses options from a JSON string, as passed on the plugin command line.
    ///
    /// Blank input yields empty options.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Serialization` for malformed JSON and
    /// `ContextError::InvalidOptions` when the document is not an object.
    pub fn from_json_str(raw: &str) -> Result<Self, ContextError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all keys.
    #[must_use]
    pub fn keys(&self) -> Vec<&String> {
        self.entries.keys().collect()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.entries
    }

    /// Returns true only when `incremental` is the JSON boolean `true`.
    ///
    /// Truthy look-alikes such as `"true"` or `1` do not count.
    #[must_use]
    pub fn incremental(&self) -> bool {
        matches!(self.get(INCREMENTAL_KEY), Some(serde_json::Value::Bool(true)))
    }

    /// Returns true if both handles point at the same entries.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.entries, &b.entries)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Options {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<HashMap<String, serde_json::Value>> for Options {
    fn from(map: HashMap<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, serde_json::Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}
