use crate::core::message::Message;

/// Ordered, append-only sequence of messages shown to the user.
///
/// `append` is the only way entries enter the sequence and nothing removes
/// or reorders them; `reset` discards the whole conversation. The transcript
/// lives only as long as the session.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn reset(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Message::you("first"));
        transcript.append(Message::ai("Claude", "second"));
        transcript.append(Message::you("third"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut transcript = Transcript::new();
        transcript.append(Message::you("hi"));
        assert_eq!(transcript.len(), 1);

        transcript.reset();
        assert!(transcript.is_empty());
    }

    #[test]
    fn last_sees_newest_entry() {
        let mut transcript = Transcript::new();
        assert!(transcript.last().is_none());

        transcript.append(Message::you("hi"));
        transcript.append(Message::ai("Qwen", "hello"));
        assert_eq!(transcript.last().map(|m| m.text.as_str()), Some("hello"));
    }
}
