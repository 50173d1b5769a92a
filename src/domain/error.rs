// src/domain/error.rs
use crate::domain::NoteId;
use std::fmt;
use thiserror::Error;

/// The request a failure belongs to; picks the generic status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Create,
    Delete,
    Greet,
}

/// Generic per-action message used when the server gave no usable detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFailure {
    pub action: Action,
    pub status: u16,
}

impl fmt::Display for StatusFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::List => write!(
                f,
                "Server responded with {}. Could not fetch notes.",
                self.status
            ),
            Action::Get => write!(f, "Failed to fetch note: {}", self.status),
            Action::Create => write!(f, "Server error: {}", self.status),
            Action::Delete => write!(f, "Failed to delete note: {}", self.status),
            Action::Greet => write!(f, "Server responded with {}", self.status),
        }
    }
}

/// Every failure the client can surface. `Display` is the banner text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Could not reach server: {0}")]
    Transport(String),
    #[error("{0}")]
    Status(StatusFailure),
    #[error("{0}")]
    Detail(String),
    #[error("Validation Error: {0}")]
    Validation(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Note text must not be empty")]
    EmptyText,
    #[error("Invalid note id: {0:?}")]
    InvalidId(String),
}

impl DomainError {
    pub fn status(action: Action, status: u16) -> Self {
        DomainError::Status(StatusFailure { action, status })
    }
}
