pub mod assembler;
pub mod build_block;
pub mod persona;

pub use assembler::{is_build_question, PromptBuilder};
pub use build_block::format_build;
pub use persona::{fallback_message, PAIMON_PREAMBLE, TRIGGER_WORDS};
