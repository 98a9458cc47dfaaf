//! HTTP server for the wiki engine.
//!
//! This crate provides a native Rust HTTP server using axum, exposing one
//! JSON endpoint per user-facing wiki action: list, view, random, search,
//! create, edit, and save. Page templating is a frontend concern; this server
//! hands out titles, rendered HTML, and raw Markdown.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         entries_dir: PathBuf::from("entries"),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (wiki-server)
//!                        │
//!                        └─► API routes (Rust handlers)
//!                                │
//!                                └─► Direct call ──► Wiki (store + render)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;
use wiki_core::Wiki;
use wiki_renderer::HtmlRenderer;
use wiki_storage::FsEntryStore;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding one Markdown file per entry.
    pub entries_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            entries_dir: PathBuf::from("entries"),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create shared storage backend and wiki engine
    let store: Arc<dyn wiki_storage::EntryStore> =
        Arc::new(FsEntryStore::new(config.entries_dir.clone()));
    let wiki = Wiki::new(store, HtmlRenderer::new());

    // Create app state
    let state = Arc::new(AppState { wiki });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from wiki config.
///
/// # Arguments
///
/// * `config` - Wiki configuration
#[must_use]
pub fn server_config_from_wiki_config(config: &wiki_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        entries_dir: config.entries_resolved.dir.clone(),
    }
}
