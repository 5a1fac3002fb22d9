//! # mindtrace-inference
//!
//! Generation backend abstraction and fallback-safe orchestration.
//!
//! This crate provides:
//! - The Ollama implementation of [`mindtrace_core::GenerationBackend`]
//! - A mock backend for deterministic tests
//! - The `best_effort` combinator: one external attempt, strict validation,
//!   deterministic substitute on any failure
//! - The recommendation orchestrator (Flow A) and synthetic-record
//!   generation (Flow B) built on that combinator
//!
//! The discipline here is that an external generation call must never cause
//! the surrounding analysis to fail: every error path lands on canned,
//! deterministic output.

pub mod fallback;
pub mod mock;
pub mod ollama;
pub mod recommend;
pub mod service;
pub mod synthetic;

pub use fallback::best_effort;
pub use mock::MockBackend;
pub use ollama::OllamaBackend;
pub use recommend::RecommendationOrchestrator;
pub use service::{validate_batch, AnalysisService};
pub use synthetic::SyntheticDataGenerator;
