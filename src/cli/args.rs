// src/cli/args.rs
use crate::domain::NoteId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the notes API (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note from the given words
    Add {
        /// Note text; multiple words are joined with spaces
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: NoteId,
    },

    /// Show a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: NoteId,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the note list as a page and open it in the browser
    Open,

    /// Interactive session (add, delete, list)
    Shell,

    /// Check that the API is reachable
    Ping,
}
