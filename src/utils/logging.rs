//! Diagnostics and the user-facing transcript log.
//!
//! Diagnostics go through `tracing`; the subscriber is only installed when
//! `RUST_LOG` asks for it, and it writes to a file because stderr would
//! corrupt the alternate screen. The transcript log is a separate concern:
//! a plain text file the user opts into with `--log`, appended to as
//! messages settle.

use crate::core::message::Message;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// File receiving `tracing` output when diagnostics are enabled.
pub const DIAGNOSTICS_FILE: &str = "parlor-debug.log";

/// Install the tracing subscriber if `RUST_LOG` is set. Without it this is
/// a no-op and diagnostics are discarded.
pub fn init_diagnostics() {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(DIAGNOSTICS_FILE)
    else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Appends settled transcript entries to a plain text file.
///
/// Inactive (every call a no-op) unless a path was supplied. Write failures
/// are reported once per call site via tracing and never interrupt the
/// session.
#[derive(Debug)]
pub struct TranscriptLog {
    file_path: Option<PathBuf>,
}

impl TranscriptLog {
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self { file_path }
    }

    pub fn disabled() -> Self {
        Self { file_path: None }
    }

    pub fn is_active(&self) -> bool {
        self.file_path.is_some()
    }

    /// Short status for the title bar, e.g. `log: chat.txt`.
    pub fn status(&self) -> Option<String> {
        self.file_path.as_ref().map(|path| {
            format!(
                "log: {}",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            )
        })
    }

    /// Append one message as `Label: first line` plus continuation lines,
    /// then a blank separator, mirroring the on-screen grouping.
    pub fn append(&self, message: &Message) {
        let Some(path) = self.file_path.as_ref() else {
            return;
        };
        if let Err(e) = self.write_entry(path, message) {
            tracing::debug!(path = %path.display(), error = %e, "transcript log write failed");
        }
    }

    fn write_entry(&self, path: &Path, message: &Message) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);

        let mut lines = message.text.lines();
        match lines.next() {
            Some(first) => writeln!(writer, "{}: {first}", message.display_label())?,
            None => writeln!(writer, "{}:", message.display_label())?,
        }
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_writes_nothing() {
        let log = TranscriptLog::disabled();
        assert!(!log.is_active());
        assert!(log.status().is_none());
        // Must not panic or create files.
        log.append(&Message::you("hi"));
    }

    #[test]
    fn entries_are_labeled_and_separated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("chat.txt");
        let log = TranscriptLog::new(Some(path.clone()));

        log.append(&Message::you("hi\nthere"));
        log.append(&Message::ai("Claude", "hello"));

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "You: hi\nthere\n\nClaude: hello\n\n");
    }

    #[test]
    fn status_names_the_file() {
        let log = TranscriptLog::new(Some(PathBuf::from("/tmp/session/chat.txt")));
        assert_eq!(log.status().as_deref(), Some("log: chat.txt"));
    }
}
