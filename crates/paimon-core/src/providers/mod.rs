pub mod gemini;
pub mod provider;

pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL, GEMINI_BASE_URL};
pub use provider::LlmProvider;
