// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{Intent, NotesApi, NotesClient, Outcome};
use crate::cli::args::{Args, Command};
use crate::infrastructure::{Config, HttpNotesApi, PageRenderer};
use crate::ports::{HtmlPresenter, TextPresenter};
use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notes client with arguments");

    let config = Config::resolve(args.config.as_deref())?.with_base_url(args.base_url.as_deref());
    debug!(?config, "Resolved configuration");
    let api = HttpNotesApi::from_config(&config.api)?;
    let base_url = api.base_url().to_string();

    let stdout = std::io::stdout();
    execute(args.command, api, &base_url, stdout.lock())
}

/// Run one command against `api`, writing user-facing output to `out`.
pub fn execute<A: NotesApi, W: Write>(
    command: Command,
    mut api: A,
    base_url: &str,
    mut out: W,
) -> Result<()> {
    match command {
        Command::List { json } => {
            if json {
                let notes = api.list_notes()?;
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
                return Ok(());
            }
            let mut client = NotesClient::new(api);
            let outcome = client.fetch_and_render();
            write!(out, "{}", TextPresenter::new().render(&client.view()))?;
            ensure_success(outcome, &client)
        }
        Command::Add { text } => {
            let mut client = NotesClient::new(api);
            client.dispatch(Intent::EditDraft(text.join(" ")));
            let outcome = client.dispatch(Intent::Submit);
            if outcome == Outcome::Skipped {
                bail!(domain::DomainError::EmptyText);
            }
            write!(out, "{}", TextPresenter::new().render(&client.view()))?;
            ensure_success(outcome, &client)
        }
        Command::Delete { note_id } => {
            let mut client = NotesClient::new(api);
            let outcome = client.dispatch(Intent::Delete(note_id));
            write!(out, "{}", TextPresenter::new().render(&client.view()))?;
            ensure_success(outcome, &client)
        }
        Command::Show { note_id, json } => {
            info!(%note_id, "Showing note");
            let note = api.get_note(&note_id)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
            } else {
                writeln!(out, "{}", note.text)?;
            }
            Ok(())
        }
        Command::Open => {
            let mut client = NotesClient::new(api);
            client.fetch_and_render();
            let html = HtmlPresenter::with_base_url(base_url).render(&client.view());

            let mut renderer = PageRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            info!(path = %path.display(), "Opening notes page");
            renderer.open_in_browser(&path)?;
            Ok(())
        }
        Command::Shell => {
            let mut client = NotesClient::new(api);
            let stdin = std::io::stdin();
            cli::shell::run_shell(&mut client, stdin.lock(), out)
        }
        Command::Ping => {
            let message = api
                .greeting()
                .with_context(|| format!("API at {} did not answer", base_url))?;
            writeln!(out, "{}", message)?;
            Ok(())
        }
    }
}

/// Turn a failed outcome into a process error carrying the banner text.
fn ensure_success<A: NotesApi>(outcome: Outcome, client: &NotesClient<A>) -> Result<()> {
    match outcome {
        Outcome::Failed => Err(anyhow!(client
            .state()
            .error
            .clone()
            .unwrap_or_else(|| "Request failed".to_string()))),
        Outcome::Succeeded | Outcome::Skipped => Ok(()),
    }
}
