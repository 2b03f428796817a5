mod log;
pub use log::{normalize_input, reply_text, ChatLog, ChatMessage, Sender, TypingToken, FALLBACK_REPLY};

mod widget;
pub use widget::ChatWidget;
