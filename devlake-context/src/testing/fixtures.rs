//! Test fixtures for building contexts.

use std::sync::Arc;

use crate::context::Context;
use crate::engine::{Dialect, Engine, EngineHandle};
use crate::model::{Connection, ScopeConfig, ToolScope};
use crate::options::{Options, INCREMENTAL_KEY};

/// An engine pointing at an in-memory SQLite database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryEngine;

impl MemoryEngine {
    /// Returns a shared handle to a new in-memory engine.
    #[must_use]
    pub fn handle() -> EngineHandle {
        Arc::new(Self)
    }
}

impl Engine for MemoryEngine {
    fn url(&self) -> &str {
        "sqlite:///:memory:"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }
}

/// Returns a sample connection.
#[must_use]
pub fn sample_connection() -> Connection {
    Connection::new(1, "test-connection")
}

/// Returns a sample scope belonging to [`sample_connection`].
#[must_use]
pub fn sample_scope() -> ToolScope {
    ToolScope::new("test/repo", "repo", 1)
}

/// Returns a sample scope config enabling every domain type.
#[must_use]
pub fn sample_scope_config() -> ScopeConfig {
    ScopeConfig::new(1, "test-scope-config")
}

/// A test context builder.
#[derive(Debug, Default)]
pub struct TestContext {
    /// Options to pass to the context. `None` leaves them out entirely.
    pub options: Option<serde_json::Map<String, serde_json::Value>>,
    /// Scope config to attach.
    pub scope_config: Option<ScopeConfig>,
    /// Engine to use instead of [`MemoryEngine`].
    pub engine: Option<EngineHandle>,
}

impl TestContext {
    /// Creates a new test context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }

    /// Enables incremental mode.
    #[must_use]
    pub fn incremental(self) -> Self {
        self.with_option(INCREMENTAL_KEY, serde_json::Value::Bool(true))
    }

    /// Attaches a scope config.
    #[must_use]
    pub fn with_scope_config(mut self, scope_config: ScopeConfig) -> Self {
        self.scope_config = Some(scope_config);
        self
    }

    /// Uses a specific engine.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineHandle) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Builds a Context from the sample connection and scope.
    #[must_use]
    pub fn build(&self) -> Context {
        Context::new(
            self.engine.clone().unwrap_or_else(MemoryEngine::handle),
            sample_connection(),
            sample_scope(),
            self.scope_config.clone(),
            self.options.clone().map(Options::from_map),
        )
    }
}
