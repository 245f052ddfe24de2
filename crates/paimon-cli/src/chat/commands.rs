use paimon_core::prompts::persona::ABOUT_TEXT;
use paimon_core::KnowledgeBase;

use super::app::App;
use super::types::ChatMsg;

pub(super) const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/characters", "characters Paimon has build data for"),
    ("/about", "about Paimon AI"),
    ("/clear", "clear chat history"),
    ("/help", "show commands"),
    ("/quit", "exit Paimon"),
];

/// Commands whose name starts with the typed prefix. Empty unless the input
/// is a bare `/word`.
pub(super) fn slash_suggestions(input: &str) -> Vec<(&'static str, &'static str)> {
    if !input.starts_with('/') || input.contains(' ') {
        return Vec::new();
    }
    SLASH_COMMANDS
        .iter()
        .filter(|(cmd, _)| cmd.starts_with(input))
        .copied()
        .collect()
}

pub(super) fn cmd_characters(app: &mut App, knowledge: &KnowledgeBase) {
    let mut text = String::from("Karakter yang tersedia:");
    for c in knowledge.iter() {
        text.push_str(&format!(
            "\n  • {} ({} {}, {}⭐, {})",
            c.name, c.element, c.weapon_type, c.rarity, c.region
        ));
    }
    text.push_str("\nTanya dengan kata 'build', 'weapon', 'artifact' atau 'team' + nama karakter.");
    app.push(ChatMsg::Info(text));
}

pub(super) fn cmd_about(app: &mut App) {
    app.push(ChatMsg::Info(ABOUT_TEXT.to_string()));
}

pub(super) fn cmd_help(app: &mut App) {
    let text = SLASH_COMMANDS
        .iter()
        .map(|(cmd, desc)| format!("{cmd:<12} {desc}"))
        .collect::<Vec<_>>()
        .join("\n");
    app.push(ChatMsg::Info(text));
}
