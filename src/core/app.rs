//! The session context: every piece of state the UI renders from.
//!
//! One `App` lives for the duration of the terminal session and is mutated
//! only by the event loop. Presentation reads it and owns nothing.

use crate::api::ChatClient;
use crate::core::config::Settings;
use crate::core::message::Message;
use crate::core::roster::BotRoster;
use crate::core::send::{begin_cycle, SendCycle};
use crate::core::transcript::Transcript;
use crate::ui::theme::Theme;
use crate::utils::input::sanitize_text_input;
use crate::utils::logging::TranscriptLog;
use ratatui::style::Style;
use tui_textarea::TextArea;

pub struct App {
    pub transcript: Transcript,
    pub roster: BotRoster,
    pub input: TextArea<'static>,
    pub theme: Theme,
    pub client: ChatClient,
    pub transcript_log: TranscriptLog,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    /// Cycles dispatched but not yet settled. Purely informational; nothing
    /// blocks on it.
    pub in_flight: usize,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let theme = Theme::from_name(&settings.theme);
        let input = build_textarea(&theme);
        Self {
            transcript: Transcript::new(),
            roster: BotRoster::builtin(),
            input,
            client: ChatClient::new(settings.endpoint),
            transcript_log: TranscriptLog::new(settings.log_file),
            scroll_offset: 0,
            auto_scroll: true,
            in_flight: 0,
            theme,
        }
    }

    pub fn draft_text(&self) -> String {
        self.input.lines().join("\n")
    }

    pub fn clear_draft(&mut self) {
        self.input = build_textarea(&self.theme);
    }

    /// Rows the input area needs for the current draft, borders excluded.
    pub fn input_height(&self) -> u16 {
        u16::try_from(self.input.lines().len().clamp(1, 6)).unwrap_or(6)
    }

    /// Start a send cycle from the current draft. On a blank draft nothing
    /// happens at all. Otherwise the user message is appended, the draft is
    /// cleared immediately (the input is usable while the request is in
    /// flight), and the captured cycle is handed back for dispatch.
    pub fn submit_draft(&mut self) -> Option<SendCycle> {
        let draft = sanitize_text_input(&self.draft_text());
        let cycle = begin_cycle(&draft, &self.roster)?;

        let user_message = cycle.user_message();
        self.transcript_log.append(&user_message);
        self.transcript.append(user_message);
        self.clear_draft();
        self.in_flight += 1;
        self.auto_scroll = true;
        Some(cycle)
    }

    /// Append a settled reply (or error entry). Called in completion order,
    /// which may differ from submission order when cycles race.
    pub fn apply_settled(&mut self, message: Message) {
        self.transcript_log.append(&message);
        self.transcript.append(message);
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

fn build_textarea(theme: &Theme) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_style(theme.input_text_style);
    textarea.set_cursor_style(theme.input_cursor_style);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Type a message...");
    textarea
}
