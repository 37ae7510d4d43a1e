//! Main chat event loop.
//!
//! One UI task drives everything: it draws frames, handles key and mouse
//! events, and drains completion notifications from spawned send tasks.
//! Send tasks never touch session state; they report back over an unbounded
//! channel and the loop applies results in completion order.

use crate::api::ChatClient;
use crate::core::app::App;
use crate::core::config::Settings;
use crate::core::message::Message;
use crate::core::send::{SendCycle, SendOutcome};
use crate::ui::renderer::{max_transcript_scroll, ui};
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;
use std::{error::Error, io, time::Duration};
use tokio::sync::mpsc;

type ChatTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Completion notifications from spawned send tasks back to the loop.
#[derive(Debug)]
pub enum SessionEvent {
    Settled(Message),
}

/// Run the interactive session until the user quits.
pub async fn run_chat(settings: Settings) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(terminal: &mut ChatTerminal, app: &mut App) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break;
                    }
                    // Enter with any modifier inserts a literal newline;
                    // only a bare Enter submits.
                    KeyCode::Enter if !key.modifiers.is_empty() => {
                        app.input.insert_newline();
                    }
                    KeyCode::Enter => {
                        if let Some(cycle) = app.submit_draft() {
                            spawn_send(cycle, app.client.clone(), tx.clone());
                        }
                    }
                    KeyCode::Tab => app.roster.select_next(),
                    KeyCode::BackTab => app.roster.select_previous(),
                    KeyCode::Up => scroll_up(app, terminal, 1)?,
                    KeyCode::Down => scroll_down(app, terminal, 1)?,
                    KeyCode::PageUp => scroll_up(app, terminal, 10)?,
                    KeyCode::PageDown => scroll_down(app, terminal, 10)?,
                    _ => {
                        app.input.input(tui_textarea::Input::from(key));
                    }
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => scroll_up(app, terminal, 3)?,
                    MouseEventKind::ScrollDown => scroll_down(app, terminal, 3)?,
                    _ => {}
                },
                _ => {}
            }
        }

        // Apply settled cycles in the order their responses arrived.
        while let Ok(event) = rx.try_recv() {
            match event {
                SessionEvent::Settled(message) => app.apply_settled(message),
            }
        }
    }

    Ok(())
}

/// One spawned task per cycle. The task owns the captured cycle, settles it,
/// and reports the transcript entry back. It never touches the `App`.
fn spawn_send(cycle: SendCycle, client: ChatClient, tx: mpsc::UnboundedSender<SessionEvent>) {
    tokio::spawn(async move {
        let outcome = match client.send_chat(&cycle.bot, &cycle.text).await {
            Ok(reply) => SendOutcome::Success { reply },
            Err(reason) => SendOutcome::Failure { reason },
        };
        // The receiver only disappears when the session is shutting down.
        let _ = tx.send(SessionEvent::Settled(cycle.settle(outcome)));
    });
}

fn scroll_up(app: &mut App, terminal: &ChatTerminal, step: u16) -> io::Result<()> {
    let max = max_transcript_scroll(app, terminal.size()?);
    if app.auto_scroll {
        app.scroll_offset = max;
        app.auto_scroll = false;
    }
    app.scroll_offset = app.scroll_offset.saturating_sub(step);
    Ok(())
}

fn scroll_down(app: &mut App, terminal: &ChatTerminal, step: u16) -> io::Result<()> {
    let max = max_transcript_scroll(app, terminal.size()?);
    app.scroll_offset = app.scroll_offset.saturating_add(step).min(max);
    if app.scroll_offset >= max {
        app.auto_scroll = true;
    }
    Ok(())
}
