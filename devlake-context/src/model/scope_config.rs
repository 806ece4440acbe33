//! Scope-specific configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category of domain data a plugin can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomainType {
    /// Repositories, commits, branches.
    Code,
    /// Issues and boards.
    Ticket,
    /// Pull requests and their comments.
    CodeReview,
    /// Cross-domain links.
    Cross,
    /// Pipelines, builds and deployments.
    Cicd,
    /// Static analysis results.
    CodeQuality,
}

impl DomainType {
    /// Every domain type.
    pub const ALL: [Self; 6] = [
        Self::Code,
        Self::Ticket,
        Self::CodeReview,
        Self::Cross,
        Self::Cicd,
        Self::CodeQuality,
    ];
}

fn all_domain_types() -> Vec<DomainType> {
    DomainType::ALL.to_vec()
}

/// Configuration narrowing what a plugin collects for a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeConfig {
    /// The scope config ID.
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// Domain types to collect. Defaults to all of them.
    #[serde(default = "all_domain_types")]
    pub entities: Vec<DomainType>,
    /// When the config was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the config was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScopeConfig {
    /// Creates a scope config enabling every domain type.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entities: all_domain_types(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Restricts collection to the given domain types.
    #[must_use]
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = DomainType>) -> Self {
        self.entities = entities.into_iter().collect();
        self
    }

    /// Returns true if the domain type is collected.
    #[must_use]
    pub fn enables(&self, domain_type: DomainType) -> bool {
        self.entities.contains(&domain_type)
    }
}
