//! Testing utilities for code that consumes a plugin context.
//!
//! This module provides:
//! - An in-memory engine that needs no database
//! - Sample connection, scope and scope config values
//! - A [`TestContext`] builder with sensible defaults

mod fixtures;

pub use fixtures::{
    sample_connection, sample_scope, sample_scope_config, MemoryEngine, TestContext,
};
