// src/application/mod.rs
pub mod intent;
pub mod notes_api;
pub mod notes_client;
pub mod state;
pub mod view;

pub use intent::{Intent, Outcome};
pub use notes_api::NotesApi;
pub use notes_client::NotesClient;
pub use state::{AppState, NotesView, RequestToken};
pub use view::{render, Row, View};
