// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{Action, DomainError, StatusFailure};
pub use note::{Note, NoteId, NoteText};
