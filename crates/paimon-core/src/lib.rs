pub mod characters;
pub mod config;
pub mod conversation;
pub mod error;
pub mod prompts;
pub mod providers;
pub mod responder;

pub use characters::{CharacterBuild, KnowledgeBase};
pub use config::PaimonConfig;
pub use conversation::{Conversation, ConversationMessage, Role};
pub use error::PaimonError;
pub use prompts::{fallback_message, format_build, is_build_question};
pub use providers::{GeminiProvider, LlmProvider};
pub use responder::{PreparedPrompt, Responder};
