// src/application/intent.rs
use crate::domain::NoteId;

/// A user action, independent of how it was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// (Re)load the note list
    Load,
    /// Replace the text in the input field
    EditDraft(String),
    /// Submit the input field as a new note
    Submit,
    Delete(NoteId),
}

/// Result of a command as seen by its caller. Failures have already been
/// written to the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// Nothing was sent (e.g. blank input)
    Skipped,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Succeeded
    }
}
