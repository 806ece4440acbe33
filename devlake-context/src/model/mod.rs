//! Data contracts handed to a context by the plugin framework.
//!
//! The context stores these values as-is and never inspects them; their
//! shapes mirror the records the DevLake server sends to plugins.

mod connection;
mod scope;
mod scope_config;

pub use connection::Connection;
pub use scope::ToolScope;
pub use scope_config::{DomainType, ScopeConfig};
