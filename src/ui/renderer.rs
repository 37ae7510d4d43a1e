//! Frame rendering: a pure function of the session context.
//!
//! Layout: bot sidebar on the left, transcript above a multi-line input bar
//! on the right. Nothing here mutates the `App`; scroll clamping is applied
//! locally so a stale offset can never paint out of bounds.

use crate::core::app::App;
use crate::ui::markdown::transcript_lines;
use crate::utils::scroll::{max_scroll_offset, wrapped_row_count};
use ratatui::layout::{Constraint, Direction, Layout, Rect, Size};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const SIDEBAR_WIDTH: u16 = 16;

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();

    let background = Block::default().style(Style::default().bg(app.theme.background_color));
    f.render_widget(background, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(app.input_height() + 2),
        ])
        .split(columns[1]);

    render_transcript(f, app, rows[0]);
    render_input(f, app, rows[1]);
}

/// Greatest transcript scroll offset valid for the current frame size. The
/// event loop uses this to clamp manual scrolling.
pub fn max_transcript_scroll(app: &App, frame: Size) -> u16 {
    let chat_width = frame.width.saturating_sub(SIDEBAR_WIDTH);
    let transcript_height = frame
        .height
        .saturating_sub(app.input_height() + 2)
        .saturating_sub(1);
    let lines = transcript_lines(&app.transcript, &app.theme);
    max_scroll_offset(wrapped_row_count(&lines, chat_width), transcript_height)
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Bots ", app.theme.title_style))
        .borders(Borders::ALL)
        .border_style(app.theme.sidebar_border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line<'_>> = vec![Line::from("")];
    for (index, label) in app.roster.labels().iter().enumerate() {
        if index == app.roster.selected_index() {
            lines.push(Line::from(Span::styled(
                format!("▌ {label}"),
                app.theme.sidebar_selected_style,
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {label}"),
                app.theme.sidebar_item_style,
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: switch",
        app.theme.sidebar_item_style,
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let lines = transcript_lines(&app.transcript, &app.theme);

    let available_height = area.height.saturating_sub(1); // title row
    let total_rows = wrapped_row_count(&lines, area.width);
    let max_offset = max_scroll_offset(total_rows, available_height);
    let offset = if app.auto_scroll {
        max_offset
    } else {
        app.scroll_offset.min(max_offset)
    };

    let mut title = format!(
        "Parlor v{} • {}",
        env!("CARGO_PKG_VERSION"),
        app.client.endpoint()
    );
    if let Some(status) = app.transcript_log.status() {
        title.push_str(" • ");
        title.push_str(&status);
    }
    let mut title_spans = vec![Span::styled(title, app.theme.title_style)];
    if app.in_flight > 0 {
        title_spans.push(Span::styled(
            format!(" • {} waiting ●", app.in_flight),
            app.theme.waiting_indicator_style,
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(Line::from(title_spans)))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.input_border_style)
        .title(Span::styled(
            "Message (Enter to send, Alt+Enter for newline)",
            app.theme.input_title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&app.input, inner);
}
