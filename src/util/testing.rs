// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotesApi;
use crate::domain::{DomainError, Note, NoteId, NoteText};

/// In-memory stand-in for the remote notes API
///
/// Behaves like a well-formed backend (ids assigned sequentially, list in
/// insertion order) unless a failure is configured for an operation.
///
/// # Examples
///
/// ```
/// use notes_client::util::testing::MockNotesApi;
/// use notes_client::domain::{DomainError, Note, NoteId};
///
/// let mock = MockNotesApi::builder()
///     .with_note(Note { id: NoteId::Int(1), text: "Milk".to_string() })
///     .with_create_failure(DomainError::Validation("too long".to_string()))
///     .build();
/// assert_eq!(mock.list_calls(), 0);
/// ```
pub struct MockNotesApi {
    notes: Vec<Note>,
    next_id: i64,
    list_failure: Option<DomainError>,
    create_failure: Option<DomainError>,
    delete_failures: HashMap<NoteId, DomainError>,
    greeting: String,
    created: Vec<String>,
    list_calls: usize,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::new()
    }

    /// Texts passed to `create_note`, in call order
    pub fn created(&self) -> &[String] {
        &self.created
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls
    }
}

impl NotesApi for MockNotesApi {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.list_calls += 1;
        match &self.list_failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.notes.clone()),
        }
    }

    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))
    }

    fn create_note(&mut self, text: &NoteText) -> Result<(), DomainError> {
        self.created.push(text.as_str().to_string());
        if let Some(e) = &self.create_failure {
            return Err(e.clone());
        }
        self.notes.push(Note {
            id: NoteId::Int(self.next_id),
            text: text.as_str().to_string(),
        });
        self.next_id += 1;
        Ok(())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        if let Some(e) = self.delete_failures.get(id) {
            return Err(e.clone());
        }
        self.notes.retain(|n| &n.id != id);
        Ok(())
    }

    fn greeting(&mut self) -> Result<String, DomainError> {
        Ok(self.greeting.clone())
    }
}

/// Builder for MockNotesApi
pub struct MockNotesApiBuilder {
    notes: Vec<Note>,
    list_failure: Option<DomainError>,
    create_failure: Option<DomainError>,
    delete_failures: HashMap<NoteId, DomainError>,
    greeting: String,
}

impl MockNotesApiBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_failure: None,
            create_failure: None,
            delete_failures: HashMap::new(),
            greeting: "Welcome to the Notes App API".to_string(),
        }
    }

    /// Seed a note already stored on the "server"
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every list_notes call fail
    pub fn with_list_failure(mut self, error: DomainError) -> Self {
        self.list_failure = Some(error);
        self
    }

    /// Make every create_note call fail
    pub fn with_create_failure(mut self, error: DomainError) -> Self {
        self.create_failure = Some(error);
        self
    }

    pub fn with_delete_failure(mut self, id: NoteId, error: DomainError) -> Self {
        self.delete_failures.insert(id, error);
        self
    }

    pub fn with_greeting(mut self, greeting: &str) -> Self {
        self.greeting = greeting.to_string();
        self
    }

    pub fn build(self) -> MockNotesApi {
        let next_id = self
            .notes
            .iter()
            .filter_map(|n| match n.id {
                NoteId::Int(id) => Some(id),
                NoteId::Str(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        MockNotesApi {
            notes: self.notes,
            next_id,
            list_failure: self.list_failure,
            create_failure: self.create_failure,
            delete_failures: self.delete_failures,
            greeting: self.greeting,
            created: vec![],
            list_calls: 0,
        }
    }
}

impl Default for MockNotesApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
