//! Wire types for the outbound history payload.
//!
//! The backend expects prior turns as
//! `{ "role": "user" | "model", "parts": [ { "text": ... } ] }`.
//! These types serialize to exactly that shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::{Author, Message};

/// Role tag the backend expects on a history turn.
///
/// Note the asymmetry with [`Author`]: the backend calls the assistant side
/// "model".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl From<Author> for TurnRole {
    fn from(author: Author) -> Self {
        match author {
            Author::User => TurnRole::User,
            Author::Assistant => TurnRole::Model,
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Model => write!(f, "model"),
        }
    }
}

/// One text part of a history turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPart {
    pub text: String,
}

/// A single prior turn in the history payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: TurnRole,
    pub parts: Vec<TurnPart>,
}

impl HistoryTurn {
    /// Map a conversation message to its wire representation.
    pub fn from_message(message: &Message) -> Self {
        Self {
            role: message.author.into(),
            parts: vec![TurnPart {
                text: message.text.clone(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(TurnRole::from(Author::User), TurnRole::User);
        assert_eq!(TurnRole::from(Author::Assistant), TurnRole::Model);
    }

    #[test]
    fn test_wire_shape() {
        let turn = HistoryTurn::from_message(&Message::assistant("**hi**"));
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "model",
                "parts": [ { "text": "**hi**" } ],
            })
        );
    }

    #[test]
    fn test_user_turn_serializes_as_user() {
        let turn = HistoryTurn::from_message(&Message::user("hello"));
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["parts"][0]["text"], "hello");
    }
}
