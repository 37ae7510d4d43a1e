//! Text-input sanitization shared by the submit path.

/// Sanitize submitted text to prevent TUI corruption: tabs become four
/// spaces, carriage returns become newlines, and remaining control
/// characters (other than newline) are dropped.
pub fn sanitize_text_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("    "),
            '\r' => out.push('\n'),
            '\n' => out.push('\n'),
            _ if c.is_control() => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize_text_input("hello world"), "hello world");
    }

    #[test]
    fn tabs_become_spaces() {
        assert_eq!(sanitize_text_input("a\tb"), "a    b");
    }

    #[test]
    fn carriage_returns_become_newlines() {
        assert_eq!(sanitize_text_input("a\r\nb\rc"), "a\n\nb\nc");
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(sanitize_text_input("a\x07b\x1b[31mc"), "ab[31mc");
    }

    #[test]
    fn newlines_survive() {
        assert_eq!(sanitize_text_input("one\ntwo\nthree"), "one\ntwo\nthree");
    }
}
