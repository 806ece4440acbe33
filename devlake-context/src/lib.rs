//! # devlake-context
//!
//! The context handed to every stage of a DevLake data-source plugin
//! pipeline.
//!
//! A [`Context`](context::Context) bundles:
//!
//! - **Engine**: a shared handle to the database the framework configured
//! - **Connection**: the data-source connection being collected
//! - **Scope**: what to collect, such as a repository or a project
//! - **Scope config**: optional narrowing of what gets collected
//! - **Options**: free-form JSON options, such as `incremental`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use devlake_context::prelude::*;
//!
//! let engine = DatabaseEngine::from_url(db_url)?.into_handle();
//! let options = Options::from_json_str(r#"{"incremental": true}"#)?;
//!
//! let ctx = Context::new(engine, connection, scope, None, Some(options));
//! if ctx.incremental() {
//!     // only fetch what changed since the last run
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod context;
pub mod engine;
pub mod errors;
pub mod model;
pub mod observability;
pub mod options;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{Context, ContextBuilder};
    pub use crate::engine::{DatabaseEngine, Dialect, Engine, EngineHandle};
    pub use crate::errors::ContextError;
    pub use crate::model::{Connection, DomainType, ScopeConfig, ToolScope};
    pub use crate::observability::{init_tracing, LogFormat};
    pub use crate::options::{Options, INCREMENTAL_KEY};
}
