//! GET /api/catalog - stacks, levels and languages for form pickers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::adapters::http::error::ErrorResponse;
use crate::domain::catalog::Stack;
use crate::ports::CatalogReader;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub stacks: Vec<&'static str>,
    pub levels: Vec<CatalogEntry>,
    pub languages: Vec<CatalogEntry>,
}

pub async fn get_catalog(State(catalog): State<Arc<dyn CatalogReader>>) -> Response {
    let result = tokio::try_join!(catalog.list_levels(), catalog.list_languages());

    match result {
        Ok((levels, languages)) => Json(CatalogResponse {
            stacks: Stack::ALL.iter().map(Stack::as_str).collect(),
            levels: levels
                .into_iter()
                .map(|l| CatalogEntry {
                    id: l.id.to_string(),
                    name: l.name,
                })
                .collect(),
            languages: languages
                .into_iter()
                .map(|l| CatalogEntry {
                    id: l.id.to_string(),
                    name: l.name,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load catalog");
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

pub fn catalog_routes(catalog: Arc<dyn CatalogReader>) -> Router {
    Router::new().route("/", get(get_catalog)).with_state(catalog)
}
