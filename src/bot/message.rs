use crate::bot::args::is_valid_user_id;

/// An inbound chat message as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Identifier of the sender (the platform user name).
    pub author: String,
    pub content: String,
}

impl Message {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }

    /// Parse a console line of the form `author: message`.
    pub fn from_line(line: &str) -> Option<Self> {
        let (author, content) = line.split_once(':')?;
        let author = author.trim();
        if !is_valid_user_id(author) {
            return None;
        }
        Some(Self::new(author, content.trim()))
    }
}
