use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::params::ListParams;
use crate::model::{GuitarDetail, GuitarListItem};
use crate::store::traits::CatalogStore;

pub type AppState<S> = Arc<S>;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Simple health check endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

fn error(status: StatusCode, code: &str, message: &str) -> ApiError {
    (status, Json(ErrorResponse::new(code, message)))
}

pub async fn list_guitars<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse<GuitarListItem>>, ApiError> {
    let params = ListParams::from_pairs(&query);

    let guitars = store.list_guitars().await.map_err(|e| {
        log::error!("list_failed error={:#}", e);
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "list_failed",
            "Failed to list guitars",
        )
    })?;

    let (items, total) = params.apply(guitars);
    Ok(Json(ListResponse {
        items,
        total,
        page: params.page,
        page_size: params.page_size,
    }))
}

pub async fn get_guitar<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(slug): Path<String>,
) -> Result<Json<GuitarDetail>, ApiError> {
    if slug.trim().is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "invalid_slug",
            "Slug is required",
        ));
    }

    let guitar = match store.get_guitar_by_slug(&slug).await {
        Ok(Some(guitar)) => guitar,
        Ok(None) => {
            return Err(error(StatusCode::NOT_FOUND, "not_found", "Guitar not found"));
        }
        Err(e) => {
            log::error!("detail_failed slug={} error={:#}", slug, e);
            return Err(error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "detail_failed",
                "Failed to load guitar",
            ));
        }
    };

    let specs = store.get_guitar_specs(&guitar.id).await.map_err(|e| {
        log::error!("specs_failed guitar_id={} error={:#}", guitar.id, e);
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "specs_failed",
            "Failed to load specs",
        )
    })?;

    let media = store.get_guitar_media(&guitar.id).await.map_err(|e| {
        log::error!("media_failed guitar_id={} error={:#}", guitar.id, e);
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "media_failed",
            "Failed to load media",
        )
    })?;

    Ok(Json(GuitarDetail::assemble(guitar, specs, media)))
}
