use super::persona::TRIGGER_WORDS;

/// True when the message mentions any build trigger word, ignoring case.
pub fn is_build_question(message: &str) -> bool {
    let lower = message.to_lowercase();
    TRIGGER_WORDS.iter().any(|w| lower.contains(w))
}

/// Assembles the single-turn prompt: preamble, optional build block, then the
/// user's message.
pub struct PromptBuilder {
    preamble: String,
    build_block: Option<String>,
}

impl PromptBuilder {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            build_block: None,
        }
    }

    pub fn with_build_block(mut self, block: Option<String>) -> Self {
        self.build_block = block;
        self
    }

    pub fn build(self, user_message: &str) -> String {
        match self.build_block {
            Some(block) => format!("{}\n\n{}\n\nUser: {}", self.preamble, block, user_message),
            None => format!("{}\n\nUser: {}", self.preamble, user_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_detection_ignores_case() {
        assert!(is_build_question("BUILD skirk"));
        assert!(is_build_question("build skirk"));
        assert!(is_build_question("Rekomendasi Senjata buat Diluc"));
    }

    #[test]
    fn trigger_detection_is_plain_substring_match() {
        // "status" contains "stat"
        assert!(is_build_question("status quest archon?"));
        assert!(is_build_question("teammate terbaik?"));
        assert!(!is_build_question("halo paimon"));
        assert!(!is_build_question(""));
    }

    #[test]
    fn prompt_without_block_is_preamble_and_message() {
        let prompt = PromptBuilder::new("PRE").build("halo paimon");
        assert_eq!(prompt, "PRE\n\nUser: halo paimon");
    }

    #[test]
    fn prompt_with_block_puts_block_between_preamble_and_message() {
        let prompt = PromptBuilder::new("PRE")
            .with_build_block(Some("BLOCK".into()))
            .build("build hu tao");
        assert_eq!(prompt, "PRE\n\nBLOCK\n\nUser: build hu tao");
    }
}
