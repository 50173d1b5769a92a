// src/ports/html.rs
use crate::application::{Row, View};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Renders a `View` as a standalone HTML page.
///
/// The page is a read-only snapshot: it has no script and no form. Each
/// note row carries the command that deletes it instead of a button.
#[derive(Debug, Default)]
pub struct HtmlPresenter {
    base_url: Option<String>,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Show the API address in the page footer
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    fn render_rows(&self, rows: &[Row]) -> String {
        let mut out = String::new();
        for row in rows {
            match row {
                Row::Note { id, text } => {
                    let id = id.to_string();
                    let _ = writeln!(
                        out,
                        r#"            <li data-id="{id}"><span class="note-text">{text}</span><code class="delete-hint">notes delete {hint}</code></li>"#,
                        id = encode_double_quoted_attribute(&id),
                        text = encode_text(text),
                        hint = encode_text(&id),
                    );
                }
                Row::Placeholder(message) => {
                    let _ = writeln!(out, "            <li>{}</li>", encode_text(message));
                }
            }
        }
        out
    }

    pub fn render(&self, view: &View) -> String {
        let (error_style, error_text) = match &view.error {
            Some(message) => ("block", encode_text(message).into_owned()),
            None => ("none", String::new()),
        };
        let loading_style = if view.loading { "block" } else { "none" };
        let footer = match &self.base_url {
            Some(url) => format!(
                "\n    <footer class=\"api\">API: {}</footer>",
                encode_text(url)
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        #error-message {{
            background: #fdecea;
            color: #b71c1c;
            padding: 0.5rem 1rem;
            border-radius: 4px;
        }}
        #notes-list {{
            list-style: none;
            padding: 0;
        }}
        #notes-list li {{
            background: white;
            border-radius: 8px;
            padding: 0.75rem 1rem;
            margin-bottom: 0.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            display: flex;
            justify-content: space-between;
        }}
        .delete-hint {{
            background: #e9ecef;
            border-radius: 4px;
            padding: 0 4px;
            color: #666;
        }}
        footer {{
            font-size: 0.9em;
            color: #666;
        }}
    </style>
</head>
<body>
    <h1>Notes</h1>
    <div id="error-message" style="display: {error_style}">{error_text}</div>
    <div id="loading-indicator" style="display: {loading_style}">Loading...</div>
    <ul id="notes-list">
{rows}    </ul>{footer}
</body>
</html>"#,
            error_style = error_style,
            error_text = error_text,
            loading_style = loading_style,
            rows = self.render_rows(&view.rows),
            footer = footer,
        )
    }
}
