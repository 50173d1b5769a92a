// src/util/text.rs

/// Single-line preview of note text for terminal output.
///
/// Uses the first non-empty line, trimmed, and cuts it to `max_chars`
/// characters, marking any truncation (dropped characters or further lines)
/// with a trailing `…`.
///
/// # Examples
///
/// ```
/// use notes_client::util::text::preview;
///
/// assert_eq!(preview("Buy milk\nand eggs", 40), "Buy milk…");
/// assert_eq!(preview("short", 40), "short");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().unwrap_or("");
    let more_lines = lines.next().is_some();

    let mut out: String = first.chars().take(max_chars).collect();
    if more_lines || first.chars().count() > max_chars {
        out.push('…');
    }
    out
}
