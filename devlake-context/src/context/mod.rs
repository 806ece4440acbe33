//! Context handed to each stage of a plugin pipeline.
//!
//! This module provides:
//! - The read-only [`Context`] bundling engine, connection, scope, scope
//!   config and options
//! - A [`ContextBuilder`] that checks required fields

mod builder;
mod plugin;

pub use builder::ContextBuilder;
pub use plugin::Context;
