// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod renderer;

pub use config::{ApiConfig, Config};
pub use http::HttpNotesApi;
pub use renderer::PageRenderer;
