//! Entries API endpoints.
//!
//! Handles listing, viewing, creating, and editing wiki entries. Rendered
//! pages come back as JSON with the entry title and HTML content; the raw
//! endpoint returns unrendered Markdown for edit forms.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use wiki_core::{Page, RawEntry};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/entries.
#[derive(Serialize)]
pub(crate) struct EntriesResponse {
    /// All stored entry titles.
    entries: Vec<String>,
}

/// A rendered entry in a JSON response.
#[derive(Serialize)]
pub(crate) struct PageResponse {
    /// Entry title.
    pub(crate) title: String,
    /// Rendered HTML content.
    pub(crate) content: String,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            title: page.title,
            content: page.html,
        }
    }
}

/// Response for GET /api/entries/{title}/raw.
#[derive(Serialize)]
pub(crate) struct RawEntryResponse {
    /// Entry title.
    title: String,
    /// Raw Markdown body, for pre-populating an edit form.
    markup: String,
}

impl From<RawEntry> for RawEntryResponse {
    fn from(entry: RawEntry) -> Self {
        Self {
            title: entry.title,
            markup: entry.markup,
        }
    }
}

/// Request body for POST /api/entries.
#[derive(Deserialize)]
pub(crate) struct CreateEntryRequest {
    /// Title for the new entry.
    title: String,
    /// Raw Markdown body.
    content: String,
}

/// Request body for PUT /api/entries/{title}.
#[derive(Deserialize)]
pub(crate) struct UpdateEntryRequest {
    /// Replacement Markdown body.
    content: String,
}

/// Handle GET /api/entries.
pub(crate) async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntriesResponse>, ServerError> {
    let entries = state.wiki.entries()?;
    Ok(Json(EntriesResponse { entries }))
}

/// Handle GET /api/entries/{title}.
pub(crate) async fn get_entry(
    Path(title): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let page = state.wiki.page(&title)?;
    Ok(Json(PageResponse::from(page)))
}

/// Handle GET /api/entries/{title}/raw.
pub(crate) async fn get_raw_entry(
    Path(title): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RawEntryResponse>, ServerError> {
    let entry = state.wiki.raw(&title)?;
    Ok(Json(RawEntryResponse::from(entry)))
}

/// Handle POST /api/entries.
///
/// Rejects with 409 Conflict when the title already exists; the stored body
/// is left untouched in that case.
pub(crate) async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let page = state.wiki.create(&request.title, &request.content)?;
    Ok((StatusCode::CREATED, Json(PageResponse::from(page))))
}

/// Handle PUT /api/entries/{title}.
///
/// Unconditional overwrite: creates the entry when absent, last writer wins.
pub(crate) async fn update_entry(
    Path(title): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateEntryRequest>,
) -> Result<Json<PageResponse>, ServerError> {
    let page = state.wiki.save(&title, &request.content)?;
    Ok(Json(PageResponse::from(page)))
}

/// Handle GET /api/random.
pub(crate) async fn random_entry(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let page = state.wiki.random_page()?;
    Ok(Json(PageResponse::from(page)))
}
