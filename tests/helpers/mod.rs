use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Request as seen by the stub server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Minimal HTTP/1.1 server on a loopback port, one connection per request
#[allow(dead_code)]
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn start<F>(handler: F) -> Result<Self>
    where
        F: Fn(&RecordedRequest) -> StubResponse + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind stub server")?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Err(e) = serve(stream, &handler, &recorded) {
                    eprintln!("stub server: {e:#}");
                }
            }
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            requests,
        })
    }

    /// Always answer with the same response
    pub fn fixed(response: StubResponse) -> Result<Self> {
        Self::start(move |_| response.clone())
    }

    /// In-memory notes backend with integer ids
    pub fn notes_backend(seed: &[(i64, &str)]) -> Result<Self> {
        let notes: Vec<(i64, String)> = seed.iter().map(|(id, t)| (*id, t.to_string())).collect();
        let store = Mutex::new(notes);

        Self::start(move |req| {
            let mut notes = store.lock().unwrap();
            let id_segment = req.path.strip_prefix("/notes/");
            match (req.method.as_str(), req.path.as_str(), id_segment) {
                ("GET", "/", _) => {
                    StubResponse::json(200, json!({"message": "Welcome to the Notes App API"}))
                }
                ("GET", "/notes", _) => StubResponse::json(200, notes_json(&notes)),
                ("POST", "/notes", _) => {
                    let text = serde_json::from_str::<Value>(&req.body)
                        .ok()
                        .and_then(|v| v.get("text").and_then(Value::as_str).map(str::to_string));
                    match text {
                        Some(text) => {
                            let id = notes.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
                            notes.push((id, text.clone()));
                            StubResponse::json(200, json!({"id": id, "text": text}))
                        }
                        None => StubResponse::json(
                            422,
                            json!({"detail": [{"loc": ["body", "text"], "msg": "Field required", "type": "missing"}]}),
                        ),
                    }
                }
                ("GET", _, Some(id)) => match find(&notes, id) {
                    Some(pos) => {
                        let (id, text) = &notes[pos];
                        StubResponse::json(200, json!({"id": id, "text": text}))
                    }
                    None => StubResponse::json(404, json!({"detail": "Note not found"})),
                },
                ("DELETE", _, Some(id)) => match find(&notes, id) {
                    Some(pos) => {
                        let (id, text) = notes.remove(pos);
                        StubResponse::json(
                            200,
                            json!({
                                "message": format!("Note with id {} has been deleted", id),
                                "deleted_note": {"id": id, "text": text},
                            }),
                        )
                    }
                    None => StubResponse::json(404, json!({"detail": "Note not found"})),
                },
                _ => StubResponse::json(404, json!({"detail": "Not Found"})),
            }
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn find(notes: &[(i64, String)], id: &str) -> Option<usize> {
    let id: i64 = id.parse().ok()?;
    notes.iter().position(|(n, _)| *n == id)
}

fn notes_json(notes: &[(i64, String)]) -> Value {
    Value::Array(
        notes
            .iter()
            .map(|(id, text)| json!({"id": id, "text": text}))
            .collect(),
    )
}

fn serve<F>(stream: TcpStream, handler: &F, recorded: &Mutex<Vec<RecordedRequest>>) -> Result<()>
where
    F: Fn(&RecordedRequest) -> StubResponse,
{
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header)?;
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse()?;
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    let request = RecordedRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let response = handler(&request);
    recorded.lock().unwrap().push(request);

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    )?;
    stream.flush()?;
    Ok(())
}

/// Base URL of a port nothing listens on
#[allow(dead_code)]
pub fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
