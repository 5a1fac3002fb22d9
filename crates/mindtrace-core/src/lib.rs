//! # mindtrace-core
//!
//! Core types, traits, and abstractions for the mindtrace analysis service.
//!
//! This crate provides the input record schema, the derived analytics types,
//! the chart-series response model, the shared error taxonomy, and the
//! generation-backend trait that other mindtrace crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::GenerationBackend;
