use paimon_core::prompts::persona::THINKING_MESSAGE;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::commands::slash_suggestions;
use super::types::{InfoBar, PAIMON_GOLD};

pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(super) fn render(app: &mut App, info: &InfoBar, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // header
            Constraint::Min(1),    // chat
            Constraint::Length(3), // input
        ])
        .split(area);

    // ── header ────────────────────────────────────────────────────────────────
    let header_lines = vec![
        Line::from(Span::styled(
            "  Your Emergency Food... eh, Guide in Teyvat!",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled("  model       ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ⚡", info.model),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  characters  ", Style::default().fg(Color::DarkGray)),
            Span::styled(info.characters.as_str(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    let header = Paragraph::new(header_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PAIMON_GOLD))
            .title(Span::styled(
                " ✨ Paimon AI Assistant ✨ ",
                Style::default()
                    .fg(PAIMON_GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(header, chunks[0]);

    // ── chat messages ─────────────────────────────────────────────────────────
    let mut lines: Vec<Line> = vec![Line::raw("")];
    for msg in &app.chat {
        lines.extend(msg.to_lines());
    }

    if app.spinning {
        lines.push(Line::from(Span::styled(
            format!("  {} {}", SPINNER[app.spin_i % SPINNER.len()], THINKING_MESSAGE),
            Style::default().fg(PAIMON_GOLD),
        )));
    }

    // Scroll clamping, measured in wrapped rows inside the borders
    let chat = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_w = chunks[1].width.saturating_sub(2);
    let total = u16::try_from(chat.line_count(inner_w)).unwrap_or(u16::MAX);
    let view_h = chunks[1].height.saturating_sub(2);
    let max_scroll = total.saturating_sub(view_h);
    if app.scroll == u16::MAX {
        app.scroll = max_scroll;
    }
    app.scroll = app.scroll.min(max_scroll);

    let chat = chat
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(" chat ", Style::default().fg(Color::DarkGray))),
        )
        .scroll((app.scroll, 0));
    frame.render_widget(chat, chunks[1]);

    // ── input box ─────────────────────────────────────────────────────────────
    let border_col = if app.spinning { Color::DarkGray } else { Color::Cyan };

    let before = &app.input[..app.cursor];
    let (cur_ch, after) = match app.input[app.cursor..].chars().next() {
        Some(ch) => (
            ch.to_string(),
            app.input[app.cursor + ch.len_utf8()..].to_string(),
        ),
        None => (" ".to_string(), String::new()),
    };

    let input_line = if app.input.is_empty() && !app.spinning {
        Line::from(vec![
            Span::styled(cur_ch, Style::default().fg(Color::Black).bg(Color::White)),
            Span::styled(
                "Tanya Paimon tentang build karakter...",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(before.to_string(), Style::default().fg(Color::White)),
            Span::styled(cur_ch, Style::default().fg(Color::Black).bg(Color::White)),
            Span::styled(after, Style::default().fg(Color::White)),
        ])
    };

    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_col))
            .title(Span::styled(" message ", Style::default().fg(border_col))),
    );
    frame.render_widget(input, chunks[2]);

    // ── slash-command suggestions ─────────────────────────────────────────────
    let suggestions = slash_suggestions(&app.input);
    if !suggestions.is_empty() {
        let pop_h = suggestions.len() as u16 + 2;
        let pop_w = chunks[2].width.min(60);
        let pop_rect = Rect::new(
            chunks[2].x,
            chunks[2].y.saturating_sub(pop_h),
            pop_w,
            pop_h,
        );

        let items: Vec<Line> = suggestions
            .iter()
            .enumerate()
            .map(|(i, (cmd, desc))| {
                let style = if app.suggest_idx == Some(i) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!(" {cmd:<12}"), style),
                    Span::styled(format!(" {desc}"), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let popup = Paragraph::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(" commands ", Style::default().fg(Color::Cyan))),
        );
        frame.render_widget(Clear, pop_rect);
        frame.render_widget(popup, pop_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paimon_core::ConversationMessage;
    use ratatui::{backend::TestBackend, Terminal};

    fn info() -> InfoBar {
        InfoBar {
            model: "gemini-2.5-flash".into(),
            characters: "Hu Tao".into(),
        }
    }

    fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn auto_scroll_reaches_end_of_wrapped_reply() {
        let paragraph = "Hu Tao ingin Staff of Homa dan set Crimson Witch of Flames. ".repeat(2);
        let mut reply = vec![paragraph.trim_end().to_string(); 20];
        reply.push("TAILMARK".into());

        let mut app = App::new();
        app.record(ConversationMessage::assistant(reply.join("\n")));
        assert_eq!(app.scroll, u16::MAX);

        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| render(&mut app, &info(), f)).unwrap();

        let rows = screen_rows(&terminal);
        assert!(
            rows.iter().any(|r| r.contains("TAILMARK")),
            "last line not on screen:\n{}",
            rows.join("\n")
        );
        // the reply wraps to far more rows than it has lines
        assert!(app.scroll > 40, "scroll stopped at {}", app.scroll);
    }

    #[test]
    fn short_chat_does_not_scroll() {
        let mut app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(&mut app, &info(), f)).unwrap();
        assert_eq!(app.scroll, 0);
    }
}
