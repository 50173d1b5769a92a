// src/application/notes_api.rs
use crate::domain::{DomainError, Note, NoteId, NoteText};

/// Remote notes backend as seen by the client.
///
/// Implementations convert transport and HTTP failures into `DomainError`
/// so that callers only ever deal with displayable errors.
pub trait NotesApi {
    /// Full note list, in server order
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError>;

    fn create_note(&mut self, text: &NoteText) -> Result<(), DomainError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError>;

    /// Welcome message served at the API root
    fn greeting(&mut self) -> Result<String, DomainError>;
}
