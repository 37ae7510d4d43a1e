//! Compiled-in defaults for the chat session.
//!
//! The roster is fixed for the life of the process. The endpoint, theme, and
//! transcript log can be overridden by the config file or command-line flags.

/// Relay endpoint receiving chat posts when nothing overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/chat";

/// Bot personas offered in the sidebar, in display order. The wire
/// identifier sent to the relay is the lowercased label.
pub const BOT_ROSTER: [&str; 3] = ["Claude", "GPT-4", "Qwen"];

/// Reply text shown for every failed send cycle, regardless of cause.
pub const ERROR_REPLY: &str = "Error getting response.";

/// Theme used when neither the config file nor the CLI picks one.
pub const DEFAULT_THEME: &str = "dark";
