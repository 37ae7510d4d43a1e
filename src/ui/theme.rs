use ratatui::style::{Color, Modifier, Style};

/// Styles for every surface the renderer paints. Two built-in palettes; the
/// config file or `--theme` picks one by name.
#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chat transcript
    pub user_label_style: Style,
    pub user_text_style: Style,
    pub bot_label_style: Style,
    pub bot_text_style: Style,

    // Markdown accents
    pub md_heading_style: Style,
    pub md_inline_code_style: Style,
    pub md_codeblock_text_style: Style,
    pub md_codeblock_bg: Option<Color>,

    // Chrome
    pub title_style: Style,
    pub sidebar_border_style: Style,
    pub sidebar_item_style: Style,
    pub sidebar_selected_style: Style,
    pub waiting_indicator_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,

            user_label_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            bot_label_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            bot_text_style: Style::default().fg(Color::White),

            md_heading_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            md_inline_code_style: Style::default().fg(Color::LightYellow),
            md_codeblock_text_style: Style::default().fg(Color::Gray),
            md_codeblock_bg: Some(Color::Rgb(30, 30, 30)),

            title_style: Style::default().fg(Color::Gray),
            sidebar_border_style: Style::default().fg(Color::DarkGray),
            sidebar_item_style: Style::default().fg(Color::Gray),
            sidebar_selected_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            waiting_indicator_style: Style::default().fg(Color::Yellow),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,

            user_label_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            bot_label_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            bot_text_style: Style::default().fg(Color::Black),

            md_heading_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            md_inline_code_style: Style::default().fg(Color::Magenta),
            md_codeblock_text_style: Style::default().fg(Color::DarkGray),
            md_codeblock_bg: Some(Color::Rgb(230, 230, 230)),

            title_style: Style::default().fg(Color::DarkGray),
            sidebar_border_style: Style::default().fg(Color::Gray),
            sidebar_item_style: Style::default().fg(Color::DarkGray),
            sidebar_selected_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            waiting_indicator_style: Style::default().fg(Color::Red),

            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            // Fallback
            _ => Self::dark_default(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_dark() {
        let theme = Theme::from_name("no-such-theme");
        assert_eq!(theme.background_color, Theme::dark_default().background_color);
    }

    #[test]
    fn light_theme_is_selectable_case_insensitively() {
        let theme = Theme::from_name("LIGHT");
        assert_eq!(theme.background_color, Color::White);
    }
}
