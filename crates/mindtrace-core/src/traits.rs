//! Core traits for mindtrace abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! (Ollama backend, test mocks) must fulfill.

use async_trait::async_trait;

use crate::Result;

/// Backend for text generation (LLM).
///
/// The analysis pipeline never depends on a concrete backend; the
/// recommendation orchestrator takes `Arc<dyn GenerationBackend>` so tests
/// can substitute a mock.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate text with system context.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
