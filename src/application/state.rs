// src/application/state.rs
use crate::domain::{DomainError, Note};
use tracing::debug;

/// Sequence number of a list request. Only the most recent one may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotesView {
    #[default]
    NotLoaded,
    Loaded(Vec<Note>),
    Failed,
}

/// Everything the client displays: the last fetched list, the loading flag,
/// the error banner and the text currently typed into the input.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub notes: NotesView,
    pub loading: bool,
    pub error: Option<String>,
    pub draft: String,
    latest: RequestToken,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a list request: show the loading indicator, drop the error banner
    /// and hand out a fresh token.
    pub fn begin_load(&mut self) -> RequestToken {
        self.latest = RequestToken(self.latest.0 + 1);
        self.loading = true;
        self.error = None;
        self.latest
    }

    /// Apply the outcome of a list request. Returns `false` when `token` has
    /// been superseded, in which case nothing changes.
    pub fn settle_load(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Note>, DomainError>,
    ) -> bool {
        if token != self.latest {
            debug!(?token, latest = ?self.latest, "Discarding stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(notes) => self.notes = NotesView::Loaded(notes),
            Err(e) => {
                self.notes = NotesView::Failed;
                self.show_error(&e);
            }
        }
        true
    }

    pub fn show_error(&mut self, error: &DomainError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Notes from the last successful load, empty otherwise
    pub fn notes(&self) -> &[Note] {
        match &self.notes {
            NotesView::Loaded(notes) => notes,
            _ => &[],
        }
    }
}
