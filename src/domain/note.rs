// src/domain/note.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned note identifier.
///
/// The client never interprets it: it is compared, displayed and used as a
/// path segment. The JSON shape the server sent (number or string) is kept
/// so that re-serialising a note gives back what the server produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(id) => write!(f, "{}", id),
            NoteId::Str(id) => f.write_str(id),
        }
    }
}

impl FromStr for NoteId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidId(s.to_string()));
        }
        // Only canonical integers become `Int`; "007" or "+7" stay as typed
        match s.parse::<i64>() {
            Ok(id) if id.to_string() == s => Ok(NoteId::Int(id)),
            _ => Ok(NoteId::Str(s.to_string())),
        }
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        NoteId::Int(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
}

/// Trimmed, non-empty note content ready to be sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteText(String);

impl NoteText {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyText);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
