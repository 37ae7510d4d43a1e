//! Markdown rendering: message text to styled terminal lines.
//!
//! A pure, stateless transform applied per message at display time. Fenced
//! code blocks with a language tag go through syntect highlighting; untagged
//! blocks and inline code get plain code styling. Malformed markdown
//! degrades to whatever pulldown-cmark makes of it.

use crate::core::message::Message;
use crate::core::transcript::Transcript;
use crate::ui::theme::Theme;
use crate::utils::syntax::highlight_code_block;
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Flatten the whole transcript, oldest to newest, one sender-labeled group
/// per message.
pub fn transcript_lines(transcript: &Transcript, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in transcript {
        lines.extend(message_lines(message, theme));
    }
    lines
}

/// One message as a label line, its rendered body, and a blank separator.
pub fn message_lines(message: &Message, theme: &Theme) -> Vec<Line<'static>> {
    let (label_style, text_style) = if message.is_user() {
        (theme.user_label_style, theme.user_text_style)
    } else {
        (theme.bot_label_style, theme.bot_text_style)
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{}:", message.display_label()),
        label_style,
    ))];
    lines.extend(markdown_lines(&message.text, text_style, theme));
    lines.push(Line::from(""));
    lines
}

/// Render markdown text with `base_style` for ordinary prose.
pub fn markdown_lines(text: &str, base_style: Style, theme: &Theme) -> Vec<Line<'static>> {
    let mut writer = MarkdownWriter::new(base_style, theme);
    for event in Parser::new(text) {
        writer.handle(event);
    }
    writer.finish()
}

struct MarkdownWriter<'t> {
    theme: &'t Theme,
    base_style: Style,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    strong: usize,
    emphasis: usize,
    in_heading: bool,
    // Per-level counter for ordered lists; `None` marks a bullet list.
    list_stack: Vec<Option<u64>>,
    in_code_block: bool,
    code_lang: String,
    code_buf: String,
}

impl<'t> MarkdownWriter<'t> {
    fn new(base_style: Style, theme: &'t Theme) -> Self {
        Self {
            theme,
            base_style,
            lines: Vec::new(),
            current: Vec::new(),
            strong: 0,
            emphasis: 0,
            in_heading: false,
            list_stack: Vec::new(),
            in_code_block: false,
            code_lang: String::new(),
            code_buf: String::new(),
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.flush_line();
                self.in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.in_heading = false;
                self.blank_line();
            }
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::List(start)) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}- "),
                };
                self.current.push(Span::styled(marker, self.base_style));
            }
            Event::End(TagEnd::Item) => self.flush_line(),
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush_line();
                self.in_code_block = true;
                self.code_lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_ascii_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_buf.clear();
            }
            Event::End(TagEnd::CodeBlock) => self.flush_code_block(),
            Event::Start(Tag::Strong) => self.strong += 1,
            Event::End(TagEnd::Strong) => self.strong = self.strong.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.emphasis += 1,
            Event::End(TagEnd::Emphasis) => self.emphasis = self.emphasis.saturating_sub(1),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_buf.push_str(&text);
                } else {
                    let style = self.text_style();
                    self.push_text(&text, style);
                }
            }
            Event::Code(code) => {
                let style = self.theme.md_inline_code_style;
                self.current.push(Span::styled(code.to_string(), style));
            }
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines
                    .push(Line::from(Span::styled("────────", self.theme.title_style)));
                self.blank_line();
            }
            _ => {}
        }
    }

    fn text_style(&self) -> Style {
        let mut style = if self.in_heading {
            self.theme.md_heading_style
        } else {
            self.base_style
        };
        if self.strong > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    // Multi-line text events still need one Line per source line.
    fn push_text(&mut self, text: &str, style: Style) {
        let mut first = true;
        for part in text.split('\n') {
            if !first {
                self.flush_line();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
            first = false;
        }
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank_line(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn flush_code_block(&mut self) {
        let highlighted = if self.code_lang.is_empty() {
            None
        } else {
            highlight_code_block(&self.code_lang, &self.code_buf, self.theme)
        };

        match highlighted {
            Some(lines) => self.lines.extend(lines),
            None => {
                let mut style = self.theme.md_codeblock_text_style;
                if let Some(bg) = self.theme.md_codeblock_bg {
                    style = style.bg(bg);
                }
                for line in self.code_buf.lines() {
                    let detabbed = line.replace('\t', "    ");
                    self.lines.push(Line::from(Span::styled(detabbed, style)));
                }
            }
        }

        self.in_code_block = false;
        self.code_lang.clear();
        self.code_buf.clear();
        self.blank_line();
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.is_empty()))
        {
            self.lines.pop();
        }
        self.lines
    }
}
