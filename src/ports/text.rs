// src/ports/text.rs
use crate::application::{Row, View};
use crate::util::text::preview;
use std::fmt::Write;

const PREVIEW_CHARS: usize = 72;

/// Renders a `View` for the terminal: one line per row, note ids right-aligned.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &View) -> String {
        let mut out = String::new();
        if view.loading {
            out.push_str("Loading...\n");
        }
        if let Some(error) = &view.error {
            let _ = writeln!(out, "Error: {}", error);
        }

        let width = view
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Note { id, .. } => Some(id.to_string().chars().count()),
                Row::Placeholder(_) => None,
            })
            .max()
            .unwrap_or(0);

        for row in &view.rows {
            match row {
                Row::Note { id, text } => {
                    let _ = writeln!(
                        out,
                        "{:>width$}  {}",
                        id.to_string(),
                        preview(text, PREVIEW_CHARS),
                        width = width
                    );
                }
                Row::Placeholder(message) => {
                    let _ = writeln!(out, "{}", message);
                }
            }
        }
        out
    }
}
