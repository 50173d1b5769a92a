// src/application/view.rs
use crate::application::state::{AppState, NotesView};
use crate::constants::{EMPTY_LIST_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER};
use crate::domain::NoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A note with its delete control
    Note { id: NoteId, text: String },
    Placeholder(&'static str),
}

/// Display-ready snapshot of `AppState`, consumed by the presenters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<Row>,
}

/// Map state to rows: one row per note, or a single placeholder row.
pub fn render(state: &AppState) -> View {
    let rows = match &state.notes {
        NotesView::NotLoaded => vec![],
        NotesView::Failed => vec![Row::Placeholder(LOAD_FAILED_PLACEHOLDER)],
        NotesView::Loaded(notes) if notes.is_empty() => {
            vec![Row::Placeholder(EMPTY_LIST_PLACEHOLDER)]
        }
        NotesView::Loaded(notes) => notes
            .iter()
            .map(|n| Row::Note {
                id: n.id.clone(),
                text: n.text.clone(),
            })
            .collect(),
    };

    View {
        loading: state.loading,
        error: state.error.clone(),
        rows,
    }
}
