//! Command-line parsing and startup wiring.

use crate::core::config::{Config, Settings};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging;
use clap::Parser;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(version)]
#[command(about = "A full-screen terminal chat interface for a local bot relay")]
#[command(
    long_about = "Parlor is a full-screen terminal chat interface that talks to a local \
bot relay over a single POST endpoint. Pick a persona in the sidebar, type, and \
read replies as formatted markdown with syntax-highlighted code blocks.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a newline\n\
  Tab / Shift+Tab   Switch bot persona\n\
  Up/Down/Mouse     Scroll through chat history\n\
  Ctrl+C            Quit"
)]
pub struct Args {
    /// Relay endpoint to post chat messages to
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// UI theme ("dark" or "light")
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Append transcript lines to this file
    #[arg(short, long, value_name = "FILE")]
    pub log: Option<String>,
}

/// Parse arguments, resolve settings, and hand off to the chat loop.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_diagnostics();

    // Config problems surface here, before the terminal enters raw mode.
    let config = Config::load()?;
    let settings = Settings::resolve(args.endpoint, args.theme, args.log, &config);

    run_chat(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "parlor",
            "--endpoint",
            "http://127.0.0.1:9000/chat",
            "--theme",
            "light",
            "--log",
            "chat.txt",
        ])
        .expect("parse");
        assert_eq!(args.endpoint.as_deref(), Some("http://127.0.0.1:9000/chat"));
        assert_eq!(args.theme.as_deref(), Some("light"));
        assert_eq!(args.log.as_deref(), Some("chat.txt"));
    }

    #[test]
    fn all_flags_are_optional() {
        let args = Args::try_parse_from(["parlor"]).expect("parse");
        assert!(args.endpoint.is_none());
        assert!(args.theme.is_none());
        assert!(args.log.is_none());
    }
}
