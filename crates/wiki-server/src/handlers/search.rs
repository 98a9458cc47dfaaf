//! Search API endpoint.
//!
//! Free-text search over entry titles. An exact title match returns the
//! rendered entry directly; anything else returns the list of titles whose
//! lowercase form contains the lowercase query.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use wiki_core::SearchOutcome;

use crate::error::ServerError;
use crate::handlers::entries::PageResponse;
use crate::state::AppState;

/// Query parameters for GET /api/search.
#[derive(Deserialize)]
pub(crate) struct SearchParams {
    /// The search query; missing is treated as empty.
    #[serde(default)]
    q: String,
}

/// Response for GET /api/search.
#[derive(Serialize)]
#[serde(untagged)]
pub(crate) enum SearchResponse {
    /// The query matched a title exactly.
    Hit {
        /// The rendered entry.
        entry: PageResponse,
    },
    /// Case-insensitive substring matches.
    Matches {
        /// The trimmed query, echoed back for display.
        query: String,
        /// Matching titles in enumeration order (may be empty).
        matches: Vec<String>,
    },
}

/// Handle GET /api/search?q=...
pub(crate) async fn search(
    Query(params): Query<SearchParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SearchResponse>, ServerError> {
    let response = match state.wiki.search(&params.q)? {
        SearchOutcome::Hit(page) => SearchResponse::Hit {
            entry: PageResponse::from(page),
        },
        SearchOutcome::Matches { query, titles } => SearchResponse::Matches {
            query,
            matches: titles,
        },
    };
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_serialization() {
        let response = SearchResponse::Hit {
            entry: PageResponse {
                title: "Python".to_owned(),
                content: "<h1>Python</h1>".to_owned(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["entry"]["title"], "Python");
        assert!(json.get("matches").is_none());
    }

    #[test]
    fn test_matches_serialization() {
        let response = SearchResponse::Matches {
            query: "pyth".to_owned(),
            matches: vec!["Python".to_owned()],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["query"], "pyth");
        assert_eq!(json["matches"][0], "Python");
        assert!(json.get("entry").is_none());
    }

    #[test]
    fn test_params_default_to_empty_query() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();

        assert_eq!(params.q, "");
    }
}
