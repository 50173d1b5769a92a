// src/cli/shell.rs
use crate::application::{Intent, NotesApi, NotesClient, Outcome};
use crate::domain::NoteId;
use crate::ports::TextPresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  list | ls            reload the note list
  add <text>           create a note
  delete | rm <id>     delete a note
  help                 show this help
  quit | exit          leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Vec<Intent>),
    Help,
    Quit,
    Invalid(String),
}

/// Translate one line of input into the intents it stands for.
pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match cmd {
        "" | "list" | "ls" => ShellCommand::Run(vec![Intent::Load]),
        "add" | "new" => ShellCommand::Run(vec![
            Intent::EditDraft(rest.to_string()),
            Intent::Submit,
        ]),
        "delete" | "rm" | "del" => match rest.parse::<NoteId>() {
            Ok(id) => ShellCommand::Run(vec![Intent::Delete(id)]),
            Err(e) => ShellCommand::Invalid(e.to_string()),
        },
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("Unknown command: {} (try 'help')", other)),
    }
}

/// Read commands from `input` until EOF or `quit`, printing the rendered
/// list after every command.
pub fn run_shell<A, R, W>(client: &mut NotesClient<A>, input: R, mut output: W) -> Result<()>
where
    A: NotesApi,
    R: BufRead,
    W: Write,
{
    let presenter = TextPresenter::new();

    client.fetch_and_render();
    write!(output, "{}", presenter.render(&client.view()))?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_line(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Help => write!(output, "{}", HELP)?,
            ShellCommand::Invalid(message) => writeln!(output, "{}", message)?,
            ShellCommand::Run(intents) => {
                for intent in intents {
                    let submit = intent == Intent::Submit;
                    let outcome = client.dispatch(intent);
                    debug!(?outcome, "Intent settled");
                    if submit && outcome == Outcome::Skipped {
                        writeln!(output, "Nothing to add")?;
                    }
                }
                write!(output, "{}", presenter.render(&client.view()))?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
