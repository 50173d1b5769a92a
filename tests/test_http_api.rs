mod helpers;

use anyhow::Result;
use helpers::{unreachable_base_url, StubResponse, StubServer};
use notes_client::application::NotesApi;
use notes_client::domain::{DomainError, NoteId, NoteText};
use notes_client::infrastructure::HttpNotesApi;
use rstest::rstest;
use serde_json::json;

#[test]
fn given_backend_with_notes_when_listing_then_returns_notes_in_server_order() -> Result<()> {
    // Arrange
    let server = StubServer::notes_backend(&[(2, "Second"), (1, "First")])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    // Act
    let notes = api.list_notes()?;

    // Assert
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, NoteId::Int(2));
    assert_eq!(notes[1].text, "First");
    Ok(())
}

#[test]
fn given_text_when_creating_then_posts_json_body() -> Result<()> {
    // Arrange
    let server = StubServer::notes_backend(&[])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    // Act
    api.create_note(&NoteText::parse("buy milk")?)?;

    // Assert
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/notes");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body)?;
    assert_eq!(body, json!({"text": "buy milk"}));
    Ok(())
}

#[test]
fn given_existing_id_when_deleting_then_sends_delete_to_note_path() -> Result<()> {
    let server = StubServer::notes_backend(&[(5, "gone soon")])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    api.delete_note(&NoteId::Int(5))?;

    let requests = server.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/notes/5");
    assert!(api.list_notes()?.is_empty());
    Ok(())
}

#[rstest]
#[case("a/b", "/notes/a%2Fb")]
#[case("q#frag", "/notes/q%23frag")]
#[case("x?y=1", "/notes/x%3Fy=1")]
#[case("007", "/notes/007")]
fn given_opaque_id_when_deleting_then_path_holds_single_encoded_segment(
    #[case] raw_id: &str,
    #[case] expected_path: &str,
) -> Result<()> {
    // Arrange
    let server = StubServer::fixed(StubResponse::json(200, json!({"message": "deleted"})))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;
    let id: NoteId = raw_id.parse()?;

    // Act
    api.delete_note(&id)?;

    // Assert
    let requests = server.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, expected_path);
    Ok(())
}

#[test]
fn given_slash_in_id_when_getting_then_path_holds_single_encoded_segment() -> Result<()> {
    let server = StubServer::fixed(StubResponse::json(200, json!({"id": "a/b", "text": "t"})))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let note = api.get_note(&NoteId::Str("a/b".to_string()))?;

    assert_eq!(note.id, NoteId::Str("a/b".to_string()));
    assert_eq!(server.requests()[0].path, "/notes/a%2Fb");
    Ok(())
}

#[test]
fn given_unknown_id_when_deleting_then_shows_server_detail() -> Result<()> {
    let server = StubServer::notes_backend(&[])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let err = api.delete_note(&NoteId::Int(99)).unwrap_err();

    assert_eq!(err, DomainError::Detail("Note not found".to_string()));
    Ok(())
}

#[test]
fn given_validation_failure_when_creating_then_returns_first_message() -> Result<()> {
    // Arrange
    let server = StubServer::fixed(StubResponse::json(
        422,
        json!({"detail": [{"loc": ["body", "text"], "msg": "text must not be empty", "type": "value_error"}]}),
    ))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    // Act
    let err = api.create_note(&NoteText::parse("x")?).unwrap_err();

    // Assert
    assert_eq!(err.to_string(), "Validation Error: text must not be empty");
    Ok(())
}

#[test]
fn given_500_without_body_when_creating_then_returns_status_message() -> Result<()> {
    let server = StubServer::fixed(StubResponse::raw(500, ""))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let err = api.create_note(&NoteText::parse("x")?).unwrap_err();

    assert_eq!(err.to_string(), "Server error: 500");
    Ok(())
}

#[test]
fn given_non_json_list_body_when_listing_then_returns_decode_error() -> Result<()> {
    let server = StubServer::fixed(StubResponse::raw(200, "<html>oops</html>"))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let err = api.list_notes().unwrap_err();

    assert!(matches!(err, DomainError::Decode(_)));
    Ok(())
}

#[test]
fn given_unreachable_server_when_listing_then_returns_transport_error() -> Result<()> {
    let mut api = HttpNotesApi::new(&unreachable_base_url()?)?;

    let err = api.list_notes().unwrap_err();

    assert!(matches!(err, DomainError::Transport(_)));
    assert!(err.to_string().starts_with("Could not reach server"));
    Ok(())
}

#[test]
fn given_existing_note_when_getting_then_returns_it() -> Result<()> {
    let server = StubServer::notes_backend(&[(3, "third")])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let note = api.get_note(&NoteId::Int(3))?;

    assert_eq!(note.text, "third");
    Ok(())
}

#[test]
fn given_message_instead_of_note_when_getting_then_returns_not_found() -> Result<()> {
    // Arrange: backend answers 200 with a message for unknown ids
    let server = StubServer::fixed(StubResponse::json(200, json!({"message": "Note not found"})))?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    // Act
    let err = api.get_note(&NoteId::Int(42)).unwrap_err();

    // Assert
    assert_eq!(err, DomainError::NoteNotFound(NoteId::Int(42)));
    Ok(())
}

#[test]
fn given_404_when_getting_then_returns_not_found() -> Result<()> {
    let server = StubServer::notes_backend(&[])?;
    let mut api = HttpNotesApi::new(&server.base_url)?;

    let err = api.get_note(&NoteId::Int(1)).unwrap_err();

    assert_eq!(err, DomainError::NoteNotFound(NoteId::Int(1)));
    Ok(())
}

#[test]
fn given_backend_when_requesting_greeting_then_returns_message() -> Result<()> {
    let server = StubServer::notes_backend(&[])?;
    let mut api = HttpNotesApi::new(&format!("{}/", server.base_url))?;

    assert_eq!(api.greeting()?, "Welcome to the Notes App API");
    Ok(())
}
