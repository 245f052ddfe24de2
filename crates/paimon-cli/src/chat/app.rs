use paimon_core::{Conversation, ConversationMessage};

use super::commands::slash_suggestions;
use super::types::ChatMsg;

// ── app state ────────────────────────────────────────────────────────────────

pub(super) struct App {
    /// The session history. Only user and assistant turns live here.
    pub(super) conversation: Conversation,
    /// What is drawn: the history plus local info/error lines.
    pub(super) chat: Vec<ChatMsg>,
    pub(super) input: String,
    pub(super) cursor: usize,
    pub(super) scroll: u16,
    pub(super) auto_scroll: bool,
    pub(super) history: Vec<String>,
    pub(super) history_idx: Option<usize>,
    pub(super) spinning: bool,
    pub(super) spin_i: usize,
    pub(super) suggest_idx: Option<usize>, // selected index in suggestion popup
}

impl App {
    pub(super) fn new() -> Self {
        let conversation = Conversation::new();
        let chat = conversation.messages().iter().map(ChatMsg::from).collect();
        Self {
            conversation,
            chat,
            input: String::new(),
            cursor: 0,
            scroll: 0,
            auto_scroll: true,
            history: Vec::new(),
            history_idx: None,
            spinning: false,
            spin_i: 0,
            suggest_idx: None,
        }
    }

    pub(super) fn push(&mut self, msg: ChatMsg) {
        self.chat.push(msg);
        if self.auto_scroll {
            self.scroll = u16::MAX;
        }
    }

    /// Record a turn in the history and show it.
    pub(super) fn record(&mut self, msg: ConversationMessage) {
        self.push(ChatMsg::from(&msg));
        self.conversation.push(msg);
    }

    pub(super) fn clear_history(&mut self) {
        self.conversation.clear();
        self.chat = self.conversation.messages().iter().map(ChatMsg::from).collect();
        self.scroll = 0;
        self.auto_scroll = true;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor > 0 {
            let i = self.input[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input.drain(i..self.cursor);
            self.cursor = i;
        }
    }

    pub(super) fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.input[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub(super) fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            let n = self.input[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += n;
        }
    }

    /// Take the trimmed input line, resetting the editor.
    pub(super) fn take_input(&mut self) -> String {
        let input = self.input.trim().to_string();
        self.input.clear();
        self.cursor = 0;
        self.suggest_idx = None;
        if !input.is_empty() {
            self.history.push(input.clone());
        }
        self.history_idx = None;
        input
    }

    /// The submitted line, or `None` while a reply is still pending. The
    /// typed text is left in place when the submission is refused.
    pub(super) fn submit(&mut self) -> Option<String> {
        if self.spinning {
            return None;
        }
        Some(self.take_input())
    }

    /// Replace the input with the highlighted suggestion, or the first one
    /// when nothing is highlighted. Returns false when there is nothing to
    /// complete.
    pub(super) fn complete_suggestion(&mut self) -> bool {
        let suggestions = slash_suggestions(&self.input);
        let idx = self
            .suggest_idx
            .filter(|i| *i < suggestions.len())
            .unwrap_or(0);
        let Some((cmd, _)) = suggestions.get(idx) else {
            return false;
        };
        self.input = cmd.to_string();
        self.cursor = self.input.len();
        self.suggest_idx = None;
        true
    }

    pub(super) fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = self
            .history_idx
            .map(|i| i.saturating_sub(1))
            .unwrap_or(self.history.len() - 1);
        self.history_idx = Some(idx);
        self.input = self.history[idx].clone();
        self.cursor = self.input.len();
        self.suggest_idx = None;
    }

    pub(super) fn history_next(&mut self) {
        if let Some(idx) = self.history_idx {
            if idx + 1 < self.history.len() {
                self.history_idx = Some(idx + 1);
                self.input = self.history[idx + 1].clone();
            } else {
                self.history_idx = None;
                self.input.clear();
            }
            self.cursor = self.input.len();
            self.suggest_idx = None;
        }
    }
}
