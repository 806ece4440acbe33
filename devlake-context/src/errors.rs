//! Error types for the plugin context.
//!
//! Building a [`Context`](crate::context::Context) directly never fails; these
//! errors cover the surfaces around it: the builder, options parsing and
//! engine URL parsing.

use std::collections::HashMap;
use thiserror::Error;

/// The main error type for context operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A required field was not supplied to the builder.
    #[error("Missing required context field: {field}")]
    MissingField {
        /// The field name.
        field: &'static str,
    },

    /// The options value was not a JSON object.
    #[error("Invalid options: expected a JSON object, found {found}")]
    InvalidOptions {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// The engine URL names a database the framework cannot talk to.
    #[error("Unsupported database URL: {url}")]
    UnsupportedDatabase {
        /// The offending URL, with any password redacted.
        url: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContextError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid options error describing the JSON value found.
    #[must_use]
    pub fn invalid_options(found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::InvalidOptions { found }
    }

    /// Creates an unsupported database error.
    #[must_use]
    pub fn unsupported_database(url: impl Into<String>) -> Self {
        Self::UnsupportedDatabase { url: url.into() }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::MissingField { field } => {
                map.insert("type".to_string(), serde_json::json!("MissingField"));
                map.insert("field".to_string(), serde_json::json!(field));
            }
            Self::InvalidOptions { found } => {
                map.insert("type".to_string(), serde_json::json!("InvalidOptions"));
                map.insert("found".to_string(), serde_json::json!(found));
            }
            Self::UnsupportedDatabase { url } => {
                map.insert("type".to_string(), serde_json::json!("UnsupportedDatabase"));
                map.insert("url".to_string(), serde_json::json!(url));
            }
            Self::Serialization(_) => {
                map.insert("type".to_string(), serde_json::json!("Serialization"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}
