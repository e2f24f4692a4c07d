//! Repository API routes
//!
//! ```text
//! GET /health                                 service + database status
//! GET /repository/{id}                        200 record | 204 absent
//! GET /repository/page?page={p}&perPage={n}   200 page   | 400 p<0 or n<1
//! PUT /repository/{id}                        200 record | 400 bad body or id mismatch | 404 absent
//! ```

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::dto::{HealthDto, PageDto, PageQuery, RepositoryDto};
use crate::error::ApiError;
use crate::AppState;

/// Report service and database health
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthDto>) {
    let database = state.db.health_check().await;
    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        warn!("Health check: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(HealthDto {
            status: label.to_string(),
            database,
            server_time: Utc::now(),
        }),
    )
}

/// Get a single repository
///
/// A missing record is answered with 204 No Content, not an error.
pub async fn get_repository(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match state.lookup.get_by_id(id).await? {
        Some(record) => Ok(Json(RepositoryDto::from(record)).into_response()),
        None => {
            debug!(repository_id = id, "Repository not found, answering 204");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Get one page of repositories
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageDto<RepositoryDto>>, ApiError> {
    let page = query.page.unwrap_or(0);
    let per_page = query.per_page.unwrap_or(state.default_per_page);

    let result = state.paginator.get_page(page, per_page).await?;

    Ok(Json(PageDto::from(result)))
}

/// Update an existing repository
pub async fn update_repository(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<RepositoryDto>, JsonRejection>,
) -> Result<Json<RepositoryDto>, ApiError> {
    // Malformed or incomplete bodies answer 400
    let Json(body) = body.map_err(|e| ApiError::validation(e.body_text()))?;

    let updated = state.updater.update_record(id, body.into_payload()).await?;

    Ok(Json(RepositoryDto::from(updated)))
}
