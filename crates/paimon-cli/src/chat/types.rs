use paimon_core::{ConversationMessage, PaimonError, Role};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub(super) const PAIMON_GOLD: Color = Color::Rgb(251, 191, 36);

// ── chat message types ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub(super) enum ChatMsg {
    User(String),
    Assistant(String),
    Info(String),
    Error(String),
}

impl From<&ConversationMessage> for ChatMsg {
    fn from(m: &ConversationMessage) -> Self {
        match m.role {
            Role::User => ChatMsg::User(m.content.clone()),
            Role::Assistant => ChatMsg::Assistant(m.content.clone()),
        }
    }
}

impl ChatMsg {
    pub(super) fn to_lines(&self) -> Vec<Line<'static>> {
        match self {
            ChatMsg::User(t) => {
                let mut lines = vec![Line::from(Span::styled(
                    " traveler ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))];
                for l in t.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(Color::Cyan),
                    )));
                }
                lines.push(Line::raw(""));
                lines
            }
            ChatMsg::Assistant(t) => {
                let mut lines = vec![Line::from(Span::styled(
                    " paimon ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(PAIMON_GOLD)
                        .add_modifier(Modifier::BOLD),
                ))];
                for l in t.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(Color::White),
                    )));
                }
                lines.push(Line::raw(""));
                lines
            }
            ChatMsg::Info(t) => {
                let mut lines: Vec<Line> = t
                    .lines()
                    .map(|l| {
                        Line::from(Span::styled(
                            format!("  {l}"),
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::ITALIC),
                        ))
                    })
                    .collect();
                lines.push(Line::raw(""));
                lines
            }
            ChatMsg::Error(t) => vec![
                Line::from(vec![
                    Span::styled(" error ", Style::default().fg(Color::White).bg(Color::Red)),
                    Span::raw("  "),
                    Span::styled(t.clone(), Style::default().fg(Color::Red)),
                ]),
                Line::raw(""),
            ],
        }
    }
}

// ── display events from background task ─────────────────────────────────────

pub(super) enum DisplayEvent {
    Reply(String),
    /// Rendered as Paimon's fallback reply by the UI loop.
    Failed(PaimonError),
}

pub(super) struct InfoBar {
    pub(super) model: String,
    pub(super) characters: String,
}
