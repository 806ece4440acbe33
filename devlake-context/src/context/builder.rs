//! Builder for [`Context`].

use super::Context;
use crate::engine::EngineHandle;
use crate::errors::ContextError;
use crate::model::{Connection, ScopeConfig, ToolScope};
use crate::options::Options;

/// Builds a [`Context`], rejecting missing required fields.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    engine: Option<EngineHandle>,
    connection: Option<Connection>,
    scope: Option<ToolScope>,
    scope_config: Option<ScopeConfig>,
    options: Option<Options>,
    extra_options: serde_json::Map<String, serde_json::Value>,
}

impl ContextBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine handle.
    #[must_use]
    pub fn engine(mut self, engine: EngineHandle) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Sets the connection.
    #[must_use]
    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: ToolScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Sets the scope config.
    #[must_use]
    pub fn scope_config(mut self, scope_config: ScopeConfig) -> Self {
        self.scope_config = Some(scope_config);
        self
    }

    /// Sets the options.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Adds a single option.
    ///
    /// Individual options are merged over any map passed to
    /// [`options`](Self::options), which then yields a fresh map instead of
    /// sharing the caller's.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_options.insert(key.into(), value);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingField` if the engine, connection or
    /// scope was not set.
    pub fn build(self) -> Result<Context, ContextError> {
        let engine = self.engine.ok_or_else(|| ContextError::missing_field("engine"))?;
        let connection = self
            .connection
            .ok_or_else(|| ContextError::missing_field("connection"))?;
        let scope = self.scope.ok_or_else(|| ContextError::missing_field("scope"))?;

        let options = if self.extra_options.is_empty() {
            self.options
        } else {
            let mut merged = self
                .options
                .map(|o| o.as_map().clone())
                .unwrap_or_default();
            merged.extend(self.extra_options);
            Some(Options::from_map(merged))
        };

        Ok(Context::new(engine, connection, scope, self.scope_config, options))
    }
}
