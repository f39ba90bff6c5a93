//! Request handlers for the blog endpoints.

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::analysis;
use crate::models::{BlogFields, BlogId, BlogInput, BlogRecord, BlogStats};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogRecord>>> {
    let blogs = state.store.list().await?;
    debug!("Listing {} blogs", blogs.len());
    Ok(Json(blogs))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogRecord>> {
    let id = parse_id(&id)?;
    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_blog(
    State(state): State<AppState>,
    body: Result<Json<BlogInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BlogRecord>)> {
    let fields = validate_body(body)?;
    let record = state.store.create(fields).await?;
    info!("Added blog {} ({})", record.id, record.title);
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<BlogInput>, JsonRejection>,
) -> ApiResult<Json<BlogRecord>> {
    let id = parse_id(&id)?;
    let fields = validate_body(body)?;

    let record = state
        .store
        .replace(&id, fields)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!("Updated blog {}", record.id);
    Ok(Json(record))
}

/// Deleting an id that is well formed but unknown still answers 204.
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    if state.store.delete(&id).await? {
        info!("Deleted blog {}", id);
    } else {
        debug!("Delete of unknown blog {}", id);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn blog_stats(State(state): State<AppState>) -> ApiResult<Json<BlogStats>> {
    let blogs = state.store.list().await?;
    Ok(Json(analysis::blog_stats(&blogs)))
}

pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}

fn parse_id(raw: &str) -> ApiResult<BlogId> {
    raw.parse().map_err(|_| ApiError::MalformedId)
}

fn validate_body(body: Result<Json<BlogInput>, JsonRejection>) -> ApiResult<BlogFields> {
    let Json(input) = body.map_err(|e| ApiError::BadBody(e.body_text()))?;
    Ok(input.validate()?)
}
