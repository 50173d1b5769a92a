// src/infrastructure/http.rs
use crate::application::NotesApi;
use crate::domain::{Action, DomainError, Note, NoteId, NoteText};
use crate::infrastructure::config::ApiConfig;
use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

/// `NotesApi` over HTTP/JSON against `{base_url}/notes`.
#[derive(Debug)]
pub struct HttpNotesApi {
    client: Client,
    base_url: String,
    base: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
struct FieldError {
    msg: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

impl HttpNotesApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base.cannot_be_a_base() {
            bail!("Invalid API base URL: {}", config.base_url);
        }

        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        info!(%base_url, "Using notes API");
        Ok(Self {
            client,
            base_url,
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn note_url(&self, id: &NoteId) -> Url {
        self.url(&["notes", &id.to_string()])
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, DomainError> {
        request
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }

    /// Read the body of a successful response; transport errors while
    /// reading are still transport errors.
    fn body(response: Response) -> Result<String, DomainError> {
        response
            .text()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }

    fn failure(action: Action, response: Response) -> DomainError {
        let status = response.status();
        // An unreadable body is treated like an empty one
        let body = response.text().unwrap_or_default();
        error_from_response(action, status, &body)
    }
}

/// Turn a non-success response into the error shown to the user.
///
/// Structured field errors yield the first message as a validation error, a
/// `detail` string is shown as is, anything else (no body, non-JSON body,
/// unexpected shape) falls back to the per-action status message.
pub fn error_from_response(action: Action, status: StatusCode, body: &str) -> DomainError {
    let generic = DomainError::status(action, status.as_u16());
    let parsed = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(status = status.as_u16(), error = %e, "Error body is not JSON");
            return generic;
        }
    };

    match parsed.detail {
        Some(Detail::Fields(fields)) => match fields.into_iter().next() {
            Some(field) => DomainError::Validation(field.msg),
            None => generic,
        },
        Some(Detail::Message(message)) if !message.is_empty() => DomainError::Detail(message),
        Some(Detail::Message(_)) | None => generic,
    }
}

impl NotesApi for HttpNotesApi {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self.send(self.client.get(self.url(&["notes"])))?;
        if !response.status().is_success() {
            return Err(Self::failure(Action::List, response));
        }
        let body = Self::body(response)?;
        let notes: Vec<Note> =
            serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        let response = self.send(self.client.get(self.note_url(id)))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id.clone()));
        }
        if !status.is_success() {
            return Err(Self::failure(Action::Get, response));
        }
        let body = Self::body(response)?;
        // A 200 carrying `{"message": ...}` instead of a note means "not found"
        serde_json::from_str::<Note>(&body).map_err(|_| {
            debug!(note_id = %id, %body, "Response is not a note");
            DomainError::NoteNotFound(id.clone())
        })
    }

    #[instrument(level = "debug", skip(self, text), fields(text = text.as_str()))]
    fn create_note(&mut self, text: &NoteText) -> Result<(), DomainError> {
        let response = self.send(
            self.client
                .post(self.url(&["notes"]))
                .json(&json!({ "text": text.as_str() })),
        )?;
        if !response.status().is_success() {
            return Err(Self::failure(Action::Create, response));
        }
        debug!(status = response.status().as_u16(), "Note created");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let response = self.send(self.client.delete(self.note_url(id)))?;
        if !response.status().is_success() {
            return Err(Self::failure(Action::Delete, response));
        }
        if let Ok(body) = Self::body(response) {
            if let Ok(reply) = serde_json::from_str::<MessageBody>(&body) {
                debug!(message = %reply.message, "Server replied to delete");
            }
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn greeting(&mut self) -> Result<String, DomainError> {
        let response = self.send(self.client.get(self.url(&[""])))?;
        if !response.status().is_success() {
            return Err(Self::failure(Action::Greet, response));
        }
        let body = Self::body(response)?;
        serde_json::from_str::<MessageBody>(&body)
            .map(|reply| reply.message)
            .map_err(|e| DomainError::Decode(e.to_string()))
    }
}
