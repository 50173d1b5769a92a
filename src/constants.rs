// src/constants.rs
//
// Application-wide constants: defaults, fixed UI strings and timings.

/// API address used when neither the config file nor `--base-url` sets one.
///
/// Matches the local development backend served over TLS.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8443";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "notes-client";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder row shown when the server returns an empty list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No notes yet. Add one!";

/// Placeholder row shown in place of the list after a failed load.
pub const LOAD_FAILED_PLACEHOLDER: &str = "Could not load notes.";

/// Delay in milliseconds after launching the browser before the temporary
/// page may be removed.
///
/// The browser opens the file asynchronously; returning earlier lets the
/// temp directory be dropped before it has been read.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
