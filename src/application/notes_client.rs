// src/application/notes_client.rs
use crate::application::intent::{Intent, Outcome};
use crate::application::notes_api::NotesApi;
use crate::application::state::AppState;
use crate::application::view::{self, View};
use crate::domain::{NoteId, NoteText};
use tracing::{debug, info, warn};

/// The notes client: owns the displayed state and turns commands into API
/// calls followed by a full refresh of the list.
///
/// No command ever returns an error. Failures are written to the error
/// banner in `AppState` and reported as `Outcome::Failed`.
pub struct NotesClient<A: NotesApi> {
    api: A,
    state: AppState,
}

impl<A: NotesApi> NotesClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> View {
        view::render(&self.state)
    }

    /// Replace the displayed list with the server's current list.
    pub fn fetch_and_render(&mut self) -> Outcome {
        let token = self.state.begin_load();
        debug!(?token, "Fetching notes");
        let result = self.api.list_notes();
        let ok = result.is_ok();
        if let Err(e) = &result {
            warn!(error = %e, "Listing notes failed");
        }
        if !self.state.settle_load(token, result) {
            return Outcome::Skipped;
        }
        if ok {
            info!(count = self.state.notes().len(), "Rendered notes");
            Outcome::Succeeded
        } else {
            Outcome::Failed
        }
    }

    /// Create a note and refresh. The outcome reflects the creation only; a
    /// failing refresh shows up in the banner.
    pub fn create(&mut self, text: &NoteText) -> Outcome {
        self.state.clear_error();
        match self.api.create_note(text) {
            Ok(()) => {
                info!(text = text.as_str(), "Created note");
                self.fetch_and_render();
                Outcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "Creating note failed");
                self.state.show_error(&e);
                Outcome::Failed
            }
        }
    }

    pub fn delete_by_id(&mut self, id: &NoteId) -> Outcome {
        self.state.clear_error();
        match self.api.delete_note(id) {
            Ok(()) => {
                info!(note_id = %id, "Deleted note");
                self.fetch_and_render();
                Outcome::Succeeded
            }
            Err(e) => {
                warn!(note_id = %id, error = %e, "Deleting note failed");
                self.state.show_error(&e);
                Outcome::Failed
            }
        }
    }

    /// Route a user intent to its command.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!(?intent, "Dispatching intent");
        match intent {
            Intent::Load => self.fetch_and_render(),
            Intent::EditDraft(text) => {
                self.state.draft = text;
                Outcome::Succeeded
            }
            Intent::Submit => self.submit_draft(),
            Intent::Delete(id) => self.delete_by_id(&id),
        }
    }

    fn submit_draft(&mut self) -> Outcome {
        let text = match NoteText::parse(&self.state.draft) {
            Ok(text) => text,
            Err(_) => {
                debug!("Ignoring blank submission");
                return Outcome::Skipped;
            }
        };
        let outcome = self.create(&text);
        if outcome.is_success() {
            self.state.draft.clear();
        }
        outcome
    }
}
