//! Core library for the `postrun` CLI.
//!
//! This crate resolves the resources a collection run needs — the collection
//! itself, plus an optional environment and globals set — from local files,
//! inline definitions, URLs, or the hosted Postman API, and aggregates them
//! into a run summary for the execution engine. The primary user-facing
//! interface is the `postrun` command-line application.
//!
//! # Module Structure
//!
//! - [`api`] - HTTP client for the hosted Postman API
//! - [`resolve`] - descriptor classification and resource loading
//! - [`run`] - fan-out/fan-in resolution and the engine seam
//! - [`error`] - typed failures surfaced to callers
//!
//! # Example
//!
//! ```ignore
//! use postrun::run::{run, RunOptions};
//!
//! async fn example() -> Result<(), postrun::RunError> {
//!     let options = RunOptions::new("collection.json")
//!         .environment("1234-931c1484-fd1e-4ceb-81d0-2aa102ca8b5f")
//!         .postman_api_key("PMAK-xxxx");
//!     let summary = run(options).await?;
//!     println!("{}", summary.collection["name"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod resolve;
pub mod run;

pub use api::{ApiClient, ResourceKind};
pub use error::{ResolveError, RunError};
pub use resolve::{Descriptor, Source};
pub use run::{Engine, NullEngine, ResolvedResources, RunOptions, RunSummary};
