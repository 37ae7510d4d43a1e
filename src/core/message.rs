use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    You,
    Ai,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::You => "you",
            Sender::Ai => "ai",
        }
    }

    pub fn is_user(self) -> bool {
        self == Sender::You
    }
}

/// One transcript entry. Immutable once appended.
///
/// `bot` is the display label of the persona captured when the send cycle
/// was dispatched, so a reply keeps its dispatch-time attribution even if
/// the user switches bots while the request is in flight. It is `None` for
/// user messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
}

impl Message {
    pub fn you(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::You,
            text: text.into(),
            bot: None,
        }
    }

    pub fn ai(bot: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            bot: Some(bot.into()),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }

    /// Label shown above the message body and in the transcript log.
    pub fn display_label(&self) -> &str {
        match self.sender {
            Sender::You => "You",
            Sender::Ai => self.bot.as_deref().unwrap_or("AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_carry_no_bot_label() {
        let msg = Message::you("hi");
        assert_eq!(msg.sender, Sender::You);
        assert_eq!(msg.bot, None);
        assert_eq!(msg.display_label(), "You");
    }

    #[test]
    fn ai_messages_keep_their_dispatch_label() {
        let msg = Message::ai("Claude", "hello");
        assert_eq!(msg.sender, Sender::Ai);
        assert_eq!(msg.display_label(), "Claude");
    }

    #[test]
    fn sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::You).expect("serialize");
        assert_eq!(json, "\"you\"");
    }
}
