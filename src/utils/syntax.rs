//! Syntect-backed highlighting for fenced code blocks.
//!
//! Highlighting a block is comparatively expensive, so results are memoized
//! in a bounded FIFO cache keyed by (language, content hash, theme
//! signature). The syntect theme is chosen to match the UI theme's
//! background brightness.

use crate::ui::theme::Theme;
use ratatui::style::Color as TuiColor;
use ratatui::text::{Line, Span};
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const CACHE_CAPACITY: usize = 64;

struct BlockCache {
    map: HashMap<u64, Vec<Line<'static>>>,
    order: VecDeque<u64>,
}

impl BlockCache {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: u64) -> Option<Vec<Line<'static>>> {
        self.map.get(&key).cloned()
    }

    fn put(&mut self, key: u64, lines: Vec<Line<'static>>) {
        if self.map.insert(key, lines).is_none() {
            self.order.push_back(key);
        }
        while self.map.len() > CACHE_CAPACITY {
            match self.order.pop_front() {
                Some(old) => {
                    self.map.remove(&old);
                }
                None => break,
            }
        }
    }
}

fn cache() -> &'static Mutex<BlockCache> {
    static CACHE: OnceLock<Mutex<BlockCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(BlockCache::new()))
}

fn cache_key(lang: &str, code: &str, theme_sig: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    lang.hash(&mut hasher);
    code.hash(&mut hasher);
    theme_sig.hash(&mut hasher);
    hasher.finish()
}

/// Map common fence tags and their aliases onto syntect token names.
pub(crate) fn normalize_lang_hint(hint: &str) -> String {
    let tag = hint.trim().to_ascii_lowercase();
    match tag.as_str() {
        "py" | "python" => "python".into(),
        "sh" | "zsh" | "shell" | "bash" => "bash".into(),
        "js" | "jsx" | "javascript" => "javascript".into(),
        "ts" | "tsx" | "typescript" => "typescript".into(),
        "rs" | "rust" => "rust".into(),
        "yml" | "yaml" => "yaml".into(),
        "c++" | "cc" | "cxx" | "hpp" | "cpp" => "cpp".into(),
        "kt" | "kotlin" => "kotlin".into(),
        "md" | "markdown" => "markdown".into(),
        other => other.into(),
    }
}

fn is_dark_background(color: &TuiColor) -> bool {
    match color {
        TuiColor::Rgb(r, g, b) => {
            let brightness = 0.2126 * f32::from(*r) + 0.7152 * f32::from(*g) + 0.0722 * f32::from(*b);
            brightness < 128.0
        }
        TuiColor::White => false,
        _ => true,
    }
}

pub(crate) fn pick_syntect_theme_name(theme: &Theme) -> &'static str {
    if is_dark_background(&theme.background_color) {
        "base16-ocean.dark"
    } else {
        "InspiredGitHub"
    }
}

fn theme_signature(theme: &Theme, syntect_name: &str) -> String {
    format!(
        "{syntect_name}|{:?}|{:?}",
        theme.md_codeblock_bg, theme.background_color
    )
}

/// Highlight one fenced block. `None` means the caller should fall back to
/// plain code styling (unknown theme, highlighting error).
pub fn highlight_code_block(
    lang_hint: &str,
    code: &str,
    theme: &Theme,
) -> Option<Vec<Line<'static>>> {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    let syntaxes = SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines);
    let themes = THEME_SET.get_or_init(ThemeSet::load_defaults);

    let lang = normalize_lang_hint(lang_hint);
    let theme_name = pick_syntect_theme_name(theme);
    let syn_theme = themes
        .themes
        .get(theme_name)
        .or_else(|| themes.themes.values().next())?;

    let signature = theme_signature(theme, theme_name);
    let key = cache_key(&lang, code, &signature);
    if let Ok(guard) = cache().lock() {
        if let Some(lines) = guard.get(key) {
            return Some(lines);
        }
    }

    let syntax = syntaxes
        .find_syntax_by_token(&lang)
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, syn_theme);
    let bg = theme.md_codeblock_bg;

    let mut out: Vec<Line<'static>> = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = highlighter.highlight_line(line, syntaxes).ok()?;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (style, text) in ranges {
            let fragment = text.strip_suffix('\n').unwrap_or(text);
            let fg = style.foreground;
            let mut span_style =
                ratatui::style::Style::default().fg(TuiColor::Rgb(fg.r, fg.g, fg.b));
            if let Some(bg) = bg {
                span_style = span_style.bg(bg);
            }
            spans.push(Span::styled(fragment.to_string(), span_style));
        }
        if spans.is_empty() {
            out.push(Line::from(""));
        } else {
            out.push(Line::from(spans));
        }
    }

    if let Ok(mut guard) = cache().lock() {
        guard.put(key, out.clone());
    }
    Some(out)
}
