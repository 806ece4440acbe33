//! The plugin pipeline context.

use crate::engine::EngineHandle;
use crate::model::{Connection, ScopeConfig, ToolScope};
use crate::options::Options;
use tracing::debug;

use super::ContextBuilder;

/// Everything a pipeline stage needs to know about the current invocation.
///
/// A context is built once per invocation and is read-only afterwards:
/// there are no setters, so stages may share one behind an `Arc` and read
/// it concurrently. The engine is a shared handle owned by the framework;
/// its own locking discipline is its business.
#[derive(Debug, Clone)]
pub struct Context {
    engine: EngineHandle,
    connection: Connection,
    scope: ToolScope,
    scope_config: Option<ScopeConfig>,
    options: Options,
}

impl Context {
    /// Creates a new context.
    ///
    /// Missing options normalize to an empty map. Supplied options are
    /// shared with the caller, not copied.
    #[must_use]
    pub fn new(
        engine: EngineHandle,
        connection: Connection,
        scope: ToolScope,
        scope_config: Option<ScopeConfig>,
        options: Option<Options>,
    ) -> Self {
        let options = options.unwrap_or_default();

        debug!(
            connection_id = connection.id,
            scope_id = %scope.id,
            has_scope_config = scope_config.is_some(),
            incremental = options.incremental(),
            "Created plugin context"
        );

        Self {
            engine,
            connection,
            scope,
            scope_config,
            options,
        }
    }

    /// Returns a builder for a context.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Returns the engine handle.
    #[must_use]
    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    /// Returns the connection.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns the scope.
    #[must_use]
    pub fn scope(&self) -> &ToolScope {
        &self.scope
    }

    /// Returns the scope config, if any.
    #[must_use]
    pub fn scope_config(&self) -> Option<&ScopeConfig> {
        self.scope_config.as_ref()
    }

    /// Returns the options. Never absent; empty when none were given.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns true if the pipeline runs in incremental mode.
    ///
    /// Only an `incremental` option holding the boolean `true` counts.
    #[must_use]
    pub fn incremental(&self) -> bool {
        self.options.incremental()
    }
}
