//! State for the assistant test-chat screen.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    /// Only the chat backend produces assistant messages; nothing in this
    /// console constructs this variant, but the transcript renders it.
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

/// Local chat transcript. Replies come from the chat backend, which this
/// console does not talk to; the transcript only records what the user sent.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a user message, ignoring blank input. Returns whether a
    /// message was actually added.
    pub fn push_user(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.to_owned(),
        });
        true
    }

    /// Clear the transcript (the "reset conversation" control).
    pub fn reset(&mut self) {
        self.messages.clear();
    }
}
