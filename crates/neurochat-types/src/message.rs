//! Conversation message types.
//!
//! Messages are created once and never mutated: the conversation is an
//! append-only sequence, and insertion order is the only ordering signal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a conversation message.
///
/// There are exactly two authors: the person typing and the assistant on
/// the other end of the wire. No richer role model exists client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Whether this message was typed by the user.
    pub fn is_user(self) -> bool {
        matches!(self, Author::User)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => write!(f, "user"),
            Author::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Author {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Author::User),
            "assistant" => Ok(Author::Assistant),
            other => Err(format!("invalid author: '{other}'")),
        }
    }
}

/// A single message in the conversation.
///
/// `id` is a UUID v7, so ids created within the same turn are distinct and
/// time-sortable. `timestamp` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Author::User)
    }

    /// Create an assistant-authored message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Author::Assistant)
    }

    fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            author,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_display_round_trip() {
        assert_eq!(Author::User.to_string(), "user");
        assert_eq!(Author::Assistant.to_string(), "assistant");
        assert_eq!("user".parse::<Author>().unwrap(), Author::User);
        assert_eq!("Assistant".parse::<Author>().unwrap(), Author::Assistant);
        assert!("model".parse::<Author>().is_err());
    }

    #[test]
    fn test_is_user() {
        assert!(Author::User.is_user());
        assert!(!Author::Assistant.is_user());
    }

    #[test]
    fn test_message_ids_distinct_within_a_turn() {
        let a = Message::user("hello");
        let b = Message::assistant("hi there");
        assert_ne!(a.id, b.id);
        assert_eq!(a.author, Author::User);
        assert_eq!(b.author, Author::Assistant);
    }
}
