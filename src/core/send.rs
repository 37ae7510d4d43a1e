//! The send-cycle contract: one user submission's round trip from draft
//! capture to a settled reply or error.
//!
//! A cycle moves through `Idle -> Dispatching -> Settled`. [`begin_cycle`]
//! is the entry guard and capture point, [`SendCycle::settle`] is the single
//! boundary where every failure cause collapses to the fixed user-visible
//! error text. Multiple cycles may be in flight at once; each settles
//! independently, in completion order.

use crate::api::SendError;
use crate::core::constants::ERROR_REPLY;
use crate::core::message::Message;
use crate::core::roster::BotRoster;

/// Everything captured when a cycle enters `Dispatching`: the draft text and
/// the persona selected at that instant. Switching bots while the request is
/// in flight does not re-label the eventual reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCycle {
    /// Lowercased identifier sent to the relay.
    pub bot: String,
    /// Display label the settled reply is attributed to.
    pub bot_label: String,
    /// Draft text exactly as submitted.
    pub text: String,
}

/// Terminal state of a cycle.
#[derive(Debug)]
pub enum SendOutcome {
    Success { reply: String },
    Failure { reason: SendError },
}

/// Entry guard: blank drafts start nothing, with no transcript mutation and
/// no network call. Anything else captures the draft and selection verbatim.
pub fn begin_cycle(draft: &str, roster: &BotRoster) -> Option<SendCycle> {
    if draft.trim().is_empty() {
        return None;
    }
    Some(SendCycle {
        bot: roster.selected_wire_id(),
        bot_label: roster.selected_label().to_string(),
        text: draft.to_string(),
    })
}

impl SendCycle {
    /// The optimistic transcript entry, appended before dispatch and never
    /// rolled back.
    pub fn user_message(&self) -> Message {
        Message::you(self.text.clone())
    }

    /// Collapse the outcome to a transcript entry. Every failure cause maps
    /// to the same fixed text; the cause itself only reaches diagnostics.
    pub fn settle(&self, outcome: SendOutcome) -> Message {
        match outcome {
            SendOutcome::Success { reply } => Message::ai(self.bot_label.clone(), reply),
            SendOutcome::Failure { reason } => {
                tracing::debug!(bot = %self.bot, error = %reason, "send cycle failed");
                Message::ai(self.bot_label.clone(), ERROR_REPLY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Sender;
    use reqwest::StatusCode;

    fn roster() -> BotRoster {
        BotRoster::builtin()
    }

    #[test]
    fn blank_drafts_start_no_cycle() {
        let roster = roster();
        assert!(begin_cycle("", &roster).is_none());
        assert!(begin_cycle("   ", &roster).is_none());
        assert!(begin_cycle("\n\t \n", &roster).is_none());
    }

    #[test]
    fn capture_uses_exact_draft_text_and_lowercased_bot() {
        let mut roster = roster();
        roster.select(1);
        let cycle = begin_cycle("hi there\nsecond line", &roster).expect("cycle starts");
        assert_eq!(cycle.bot, "gpt-4");
        assert_eq!(cycle.bot_label, "GPT-4");
        assert_eq!(cycle.text, "hi there\nsecond line");
    }

    #[test]
    fn user_message_is_verbatim_you_entry() {
        let cycle = begin_cycle("hi", &roster()).expect("cycle starts");
        let msg = cycle.user_message();
        assert_eq!(msg.sender, Sender::You);
        assert_eq!(msg.text, "hi");
    }

    #[test]
    fn success_settles_with_reply_verbatim() {
        let cycle = begin_cycle("hi", &roster()).expect("cycle starts");
        let msg = cycle.settle(SendOutcome::Success {
            reply: "**hello** `world`".to_string(),
        });
        assert_eq!(msg.sender, Sender::Ai);
        assert_eq!(msg.text, "**hello** `world`");
        assert_eq!(msg.display_label(), "Claude");
    }

    #[test]
    fn every_failure_cause_collapses_to_the_fixed_text() {
        let cycle = begin_cycle("hi", &roster()).expect("cycle starts");

        let status = cycle.settle(SendOutcome::Failure {
            reason: SendError::Status(StatusCode::INTERNAL_SERVER_ERROR),
        });
        assert_eq!(status.text, ERROR_REPLY);

        let bad_gateway = cycle.settle(SendOutcome::Failure {
            reason: SendError::Status(StatusCode::BAD_GATEWAY),
        });
        assert_eq!(bad_gateway.text, ERROR_REPLY);
    }

    #[test]
    fn reply_keeps_dispatch_label_after_roster_switch() {
        let mut roster = roster();
        let cycle = begin_cycle("hi", &roster).expect("cycle starts");

        // Selection moves while the request is in flight.
        roster.select(2);
        assert_eq!(roster.selected_label(), "Qwen");

        let msg = cycle.settle(SendOutcome::Success {
            reply: "hello".to_string(),
        });
        assert_eq!(msg.display_label(), "Claude");
    }

    #[test]
    fn cycles_settle_independently_in_completion_order() {
        let roster = roster();
        let first = begin_cycle("one", &roster).expect("cycle starts");
        let second = begin_cycle("two", &roster).expect("cycle starts");

        // The second response races ahead of the first.
        let settled_second = second.settle(SendOutcome::Success {
            reply: "reply two".to_string(),
        });
        let settled_first = first.settle(SendOutcome::Success {
            reply: "reply one".to_string(),
        });

        assert_eq!(settled_second.text, "reply two");
        assert_eq!(settled_first.text, "reply one");
    }
}
