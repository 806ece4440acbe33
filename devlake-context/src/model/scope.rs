//! Extraction scopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unit a plugin extracts data for, such as a repository or a project.
///
/// Scope IDs are strings because each data source names its scopes
/// differently (a repository full name, a project key, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolScope {
    /// The scope ID within its data source.
    pub id: String,
    /// Human-readable scope name.
    pub name: String,
    /// The connection this scope belongs to.
    pub connection_id: u64,
    /// The scope config attached to this scope, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_config_id: Option<u64>,
    /// When the scope was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the scope was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ToolScope {
    /// Creates a new scope.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, connection_id: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            connection_id,
            scope_config_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Attaches a scope config.
    #[must_use]
    pub fn with_scope_config_id(mut self, scope_config_id: u64) -> Self {
        self.scope_config_id = Some(scope_config_id);
        self
    }
}
