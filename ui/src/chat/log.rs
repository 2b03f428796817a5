//! Conversation model behind the chat widget.

use std::fmt;

use api::{ApiError, ChatReply};
use tracing::warn;

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble connecting to my brain right now. Please try again later!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

/// Identifier of the transient "typing" placeholder (`typing-<ms>-<seq>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypingToken(String);

impl fmt::Display for TypingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append-only message log with at most one typing indicator, which always
/// renders after the last message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    typing: Option<TypingToken>,
    next_id: u64,
}

impl ChatLog {
    pub fn with_greeting(text: impl Into<String>) -> Self {
        let mut log = Self::default();
        log.push(Sender::Bot, text.into());
        log
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Sender::User, text.into());
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(Sender::Bot, text.into());
    }

    fn push(&mut self, sender: Sender, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, sender, text });
    }

    /// Shows the typing indicator and returns its token. An indicator left
    /// over from an earlier request is replaced, never duplicated.
    pub fn begin_typing(&mut self, now_ms: i64) -> TypingToken {
        let token = TypingToken(format!("typing-{now_ms}-{}", self.next_id));
        self.next_id += 1;
        self.typing = Some(token.clone());
        token
    }

    /// Removes the indicator if it is still the one `token` names.
    pub fn end_typing(&mut self, token: &TypingToken) -> bool {
        if self.typing.as_ref() == Some(token) {
            self.typing = None;
            true
        } else {
            false
        }
    }

    pub fn typing(&self) -> Option<&TypingToken> {
        self.typing.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Trimmed input, or `None` when there is nothing to send.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text of the bot's answer; any failure degrades to [`FALLBACK_REPLY`].
pub fn reply_text(result: Result<ChatReply, ApiError>) -> String {
    match result {
        Ok(reply) => reply.response,
        Err(err) => {
            warn!(%err, "chat request failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_input_is_a_no_op() {
        assert_eq!(normalize_input("   \t "), None);
        assert_eq!(normalize_input("  bmi? "), Some("bmi?".to_string()));
    }

    #[test]
    fn one_indicator_added_and_the_same_one_removed() {
        let mut log = ChatLog::default();
        log.push_user("what is bmi");
        let token = log.begin_typing(1_700_000_000_000);
        assert_eq!(log.typing(), Some(&token));
        assert!(token.to_string().starts_with("typing-1700000000000"));

        assert!(log.end_typing(&token));
        assert!(log.typing().is_none());
        log.push_bot("Body Mass Index ...");

        let senders: Vec<_> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    }

    #[test]
    fn failure_path_still_removes_indicator() {
        let mut log = ChatLog::default();
        log.push_user("hello");
        let token = log.begin_typing(5);
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<")
            .unwrap_err()
            .into();
        let text = reply_text(Err(err));
        assert!(log.end_typing(&token));
        log.push_bot(text);

        assert!(log.typing().is_none());
        assert_eq!(log.messages().last().unwrap().text, FALLBACK_REPLY);
    }

    #[test]
    fn stale_token_does_not_remove_newer_indicator() {
        let mut log = ChatLog::default();
        let first = log.begin_typing(10);
        let second = log.begin_typing(10);
        assert_ne!(first, second);
        assert!(!log.end_typing(&first));
        assert_eq!(log.typing(), Some(&second));
    }

    #[test]
    fn greeting_seeds_a_bot_message() {
        let log = ChatLog::with_greeting("Hi!");
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
        assert_eq!(log.messages()[0].sender.css_class(), "bot");
    }

    #[test]
    fn server_reply_is_used_verbatim() {
        let reply = ChatReply {
            response: "Hello! I'm Hearty.".into(),
        };
        assert_eq!(reply_text(Ok(reply)), "Hello! I'm Hearty.");
    }
}
