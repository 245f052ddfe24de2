use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paimon_core::{fallback_message, ConversationMessage, Responder};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use super::app::App;
use super::commands::{cmd_about, cmd_characters, cmd_help, slash_suggestions};
use super::render::render;
use super::types::{ChatMsg, DisplayEvent, InfoBar};

// ── async helper: recv or park ───────────────────────────────────────────────

async fn recv_event(rx: &mut Option<mpsc::Receiver<DisplayEvent>>) -> Option<DisplayEvent> {
    match rx {
        Some(r) => r.recv().await,
        None => std::future::pending().await,
    }
}

// ── main entry ───────────────────────────────────────────────────────────────

pub async fn run(responder: Arc<Responder>) -> Result<()> {
    let info = InfoBar {
        model: responder.model().to_string(),
        characters: responder
            .knowledge()
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", "),
    };

    // Restore the terminal even if something panics, otherwise the shell is
    // left in raw mode.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, responder, &info).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    responder: Arc<Responder>,
    info: &InfoBar,
) -> Result<()> {
    // Keyboard reader thread
    let (key_tx, mut key_rx) = mpsc::channel::<Event>(32);
    tokio::task::spawn_blocking(move || loop {
        // Receiver dropped: the UI has exited
        if key_tx.is_closed() {
            break;
        }
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(ev) = event::read() {
                if key_tx.blocking_send(ev).is_err() {
                    break;
                }
            }
        }
    });

    let mut app = App::new();
    let mut reply_rx: Option<mpsc::Receiver<DisplayEvent>> = None;
    let mut turn_handle: Option<tokio::task::JoinHandle<()>> = None;
    let mut ticker = tokio::time::interval(Duration::from_millis(80));

    'main: loop {
        terminal.draw(|f| render(&mut app, info, f))?;

        tokio::select! {
            // ── spinner ──
            _ = ticker.tick(), if app.spinning => {
                app.spin_i = app.spin_i.wrapping_add(1);
            }
            // ── keyboard ──
            key = key_rx.recv() => {
                let Some(ev) = key else { break };

                let Event::Key(key) = ev else { continue 'main };
                if key.kind != KeyEventKind::Press { continue 'main; }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break 'main;
                }

                match key.code {
                    KeyCode::Up if slash_suggestions(&app.input).is_empty() => {
                        app.auto_scroll = false;
                        app.scroll = app.scroll.saturating_sub(3);
                    }
                    KeyCode::Down if slash_suggestions(&app.input).is_empty() => {
                        app.scroll = app.scroll.saturating_add(3);
                        if app.scroll == u16::MAX { app.auto_scroll = true; }
                    }
                    KeyCode::Up => {
                        let len = slash_suggestions(&app.input).len();
                        app.suggest_idx = Some(match app.suggest_idx {
                            None | Some(0) => len - 1,
                            Some(i) => i - 1,
                        });
                    }
                    KeyCode::Down => {
                        let len = slash_suggestions(&app.input).len();
                        app.suggest_idx = Some(match app.suggest_idx {
                            None => 0,
                            Some(i) => (i + 1) % len,
                        });
                    }
                    KeyCode::PageUp => {
                        app.auto_scroll = false;
                        app.scroll = app.scroll.saturating_sub(10);
                    }
                    KeyCode::PageDown => {
                        app.scroll = app.scroll.saturating_add(10);
                    }
                    KeyCode::Tab => {
                        app.complete_suggestion();
                    }
                    KeyCode::Esc => app.suggest_idx = None,
                    KeyCode::Left  => { app.suggest_idx = None; app.cursor_left(); }
                    KeyCode::Right => { app.suggest_idx = None; app.cursor_right(); }
                    KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.cursor = 0;
                    }
                    KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.cursor = app.input.len();
                    }
                    KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.history_prev();
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.history_next();
                    }
                    KeyCode::Backspace => { app.suggest_idx = None; app.backspace(); }
                    KeyCode::Enter => {
                        // A highlighted suggestion completes instead of submitting
                        if app.suggest_idx.is_some() && app.complete_suggestion() {
                            continue 'main;
                        }
                        // One outstanding request at a time, commands included
                        let Some(input) = app.submit() else { continue 'main };
                        if input.is_empty() { continue 'main; }
                        app.auto_scroll = true;
                        app.scroll = u16::MAX;

                        match input.as_str() {
                            "/quit" => break 'main,
                            "/clear" => app.clear_history(),
                            "/characters" => cmd_characters(&mut app, responder.knowledge()),
                            "/about" => cmd_about(&mut app),
                            "/help" => cmd_help(&mut app),
                            s if s.starts_with('/') => {
                                app.push(ChatMsg::Error(format!("unknown command {s} (try /help)")));
                            }
                            _ => {
                                app.record(ConversationMessage::user(&input));
                                let prepared = responder.prepare(&input);
                                if let Some(name) = prepared.character {
                                    app.push(ChatMsg::Info(format!("📚 build data: {name}")));
                                }
                                app.spinning = true;

                                let (tx, rx) = mpsc::channel::<DisplayEvent>(1);
                                reply_rx = Some(rx);
                                let responder = Arc::clone(&responder);
                                turn_handle = Some(tokio::spawn(async move {
                                    let event = match responder.generate(&prepared).await {
                                        Ok(text) => DisplayEvent::Reply(text),
                                        Err(e) => DisplayEvent::Failed(e),
                                    };
                                    let _ = tx.send(event).await;
                                }));
                            }
                        }
                    }
                    KeyCode::Char(c) => { app.suggest_idx = None; app.insert_char(c); }
                    _ => {}
                }
            }
            // ── generation result ──
            ev = recv_event(&mut reply_rx) => {
                app.spinning = false;
                reply_rx = None;
                turn_handle = None;
                match ev {
                    Some(DisplayEvent::Reply(text)) => {
                        app.record(ConversationMessage::assistant(text));
                    }
                    Some(DisplayEvent::Failed(e)) => {
                        tracing::warn!(error = %e, "generation failed, showing fallback");
                        app.record(ConversationMessage::assistant(fallback_message(&e)));
                    }
                    None => {
                        app.push(ChatMsg::Error("reply task ended unexpectedly".into()));
                    }
                }
            }
        }
    }

    if let Some(h) = turn_handle.take() {
        h.abort();
    }
    info!(turns = app.conversation.len(), "session ended");
    Ok(())
}
