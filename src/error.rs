//! Error types for the state table.

use std::fmt;
use thiserror::Error;

/// A required field of a state event envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    StateKey,
    Sender,
    Content,
}

impl Field {
    /// Name of the member in the JSON envelope.
    pub fn member_name(self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::StateKey => "state_key",
            Field::Sender => "sender",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member_name())
    }
}

/// Why a raw event could not become a state event.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("event missing field: {0}")]
    MissingField(Field),

    #[error("event is not a JSON object")]
    NotAnObject,

    #[error("malformed event: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for StateError {
    fn from(e: serde_json::Error) -> Self {
        StateError::Malformed(e.to_string())
    }
}

/// Result type for state table helpers.
pub type Result<T> = std::result::Result<T, StateError>;
