//! Centralized default constants for the mindtrace system.
//!
//! **This module is the single source of truth** for all shared default
//! values. Other crates reference these constants instead of defining their
//! own magic numbers.

// =============================================================================
// ANALYSIS
// =============================================================================

/// Minimum record batch size for a meaningful analysis.
/// Batches below this are rejected at the request boundary.
pub const MIN_BATCH_SIZE: usize = 5;

/// Number of top-ranked vocabulary words returned by topic analysis.
pub const TOP_WORD_COUNT: usize = 7;

/// Number of raw records sampled for the engagement-vs-mood scatter series.
pub const SCATTER_SAMPLE_SIZE: usize = 5;

/// Exact number of recommendation cards in every response.
pub const RECOMMENDATION_COUNT: usize = 4;

/// Default analysis window in days for synthetic-data generation.
pub const ANALYSIS_PERIOD_DAYS: i64 = 7;

/// Default number of synthetic records generated per request.
pub const SAMPLE_POST_COUNT: usize = 10;

// =============================================================================
// INFERENCE
// =============================================================================

/// Default Ollama endpoint.
pub const OLLAMA_URL: &str = "http://localhost:11434";

/// Default generation model.
pub const GEN_MODEL: &str = "qwen3:8b";

/// Timeout for generation requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Default maximum request body size in bytes (batches can be large).
pub const BODY_LIMIT_BYTES: usize = 8 * 1024 * 1024;
