use crate::characters::KnowledgeBase;
use crate::error::Result;
use crate::prompts::{fallback_message, format_build, is_build_question, PromptBuilder, PAIMON_PREAMBLE};
use crate::providers::LlmProvider;
use std::sync::Arc;
use tracing::{info, warn};

/// A prompt ready to send, plus which character (if any) enriched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrompt {
    pub prompt: String,
    pub character: Option<&'static str>,
}

/// Turns one user message into one assistant reply.
///
/// Stateless: each call sends only the current message, never earlier turns.
pub struct Responder {
    knowledge: Arc<KnowledgeBase>,
    provider: Arc<dyn LlmProvider>,
}

impl Responder {
    pub fn new(knowledge: Arc<KnowledgeBase>, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            knowledge,
            provider,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Trigger detection, lookup and prompt assembly. No I/O.
    pub fn prepare(&self, user_message: &str) -> PreparedPrompt {
        let character = if is_build_question(user_message) {
            self.knowledge.lookup(user_message)
        } else {
            None
        };

        if let Some(c) = character {
            info!(character = c.name, "attaching build block");
        }

        let prompt = PromptBuilder::new(PAIMON_PREAMBLE)
            .with_build_block(character.map(format_build))
            .build(user_message);

        PreparedPrompt {
            prompt,
            character: character.map(|c| c.name),
        }
    }

    /// Send a prepared prompt. The error is returned as-is so callers can
    /// decide how to present it.
    pub async fn generate(&self, prepared: &PreparedPrompt) -> Result<String> {
        self.provider.generate(&prepared.prompt).await
    }

    /// Full turn. Never fails: generation errors become Paimon's fallback reply.
    pub async fn respond(&self, user_message: &str) -> String {
        let prepared = self.prepare(user_message);
        match self.generate(&prepared).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generation failed, replying with fallback");
                fallback_message(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaimonError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every prompt and answers with a canned result.
    struct MockProvider {
        reply: std::result::Result<String, PaimonError>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(detail: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(PaimonError::generation(detail)),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }

        fn model(&self) -> &str {
            "mock"
        }
    }

    fn responder(provider: Arc<MockProvider>) -> Responder {
        let kb = Arc::new(KnowledgeBase::builtin().unwrap());
        Responder::new(kb, provider)
    }

    #[tokio::test]
    async fn build_question_is_enriched_with_block() {
        let mock = MockProvider::ok("Homa itu keren!");
        let r = responder(mock.clone());

        let reply = r.respond("build hu tao").await;
        assert_eq!(reply, "Homa itu keren!");

        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.starts_with(PAIMON_PREAMBLE));
        assert!(prompt.contains("Crimson Witch of Flames (4pc)"));
        assert!(prompt.contains("Staff of Homa"));
        assert!(prompt.ends_with("\n\nUser: build hu tao"));
    }

    #[tokio::test]
    async fn small_talk_is_sent_without_block() {
        let mock = MockProvider::ok("Halo Traveler!");
        let r = responder(mock.clone());

        r.respond("halo paimon").await;

        let prompts = mock.prompts();
        assert_eq!(prompts[0], format!("{PAIMON_PREAMBLE}\n\nUser: halo paimon"));
    }

    #[tokio::test]
    async fn localized_question_matches_ganyu() {
        let mock = MockProvider::ok("ok");
        let r = responder(mock.clone());

        let prepared = r.prepare("weapon terbaik untuk ganyu");
        assert_eq!(prepared.character, Some("Ganyu"));
        assert!(prepared.prompt.contains("Amos' Bow"));
        assert!(prepared.prompt.contains("Blizzard Strayer (4pc)"));

        r.respond("weapon terbaik untuk ganyu").await;
        assert_eq!(mock.prompts()[0], prepared.prompt);
    }

    #[tokio::test]
    async fn trigger_without_known_character_is_not_enriched() {
        let r = responder(MockProvider::ok("ok"));
        let prepared = r.prepare("build nahida");
        assert_eq!(prepared.character, None);
        assert_eq!(prepared.prompt, format!("{PAIMON_PREAMBLE}\n\nUser: build nahida"));
    }

    #[tokio::test]
    async fn character_without_trigger_is_not_enriched() {
        let r = responder(MockProvider::ok("ok"));
        let prepared = r.prepare("siapa itu hu tao?");
        assert_eq!(prepared.character, None);
        assert!(!prepared.prompt.contains("CHARACTER INFO"));
    }

    #[tokio::test]
    async fn uppercase_trigger_still_enriches() {
        let r = responder(MockProvider::ok("ok"));
        assert_eq!(r.prepare("BUILD skirk").character, Some("Skirk"));
        assert_eq!(r.prepare("build skirk").character, Some("Skirk"));
    }

    #[tokio::test]
    async fn failure_becomes_fallback_with_original_detail() {
        let r = responder(MockProvider::failing("error sending request: connection reset"));

        let reply = r.respond("build diluc").await;
        assert!(!reply.is_empty());
        assert!(reply.to_lowercase().contains("error"));
        assert!(reply.contains("connection reset"));
    }

    #[tokio::test]
    async fn generate_keeps_the_error_tagged() {
        let r = responder(MockProvider::failing("quota exceeded"));
        let prepared = r.prepare("halo");
        let err = r.generate(&prepared).await.unwrap_err();
        assert_eq!(err, PaimonError::generation("quota exceeded"));
    }
}
