use std::future::Future;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::error;

use crate::{
    error::{AppError, AppResult},
    models::{HealthResponse, Record, RecordFields, RecordId},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_records(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let store = state.store.clone();
    let records = run_to_completion(async move { store.list().await }).await?;

    Ok(Json(records))
}

pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let Json(fields) = payload?;

    let store = state.store.clone();
    let record = run_to_completion(async move { store.create(fields).await }).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_record(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> AppResult<Json<Record>> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    let Json(fields) = payload?;

    let store = state.store.clone();
    let record = run_to_completion(async move { store.update(id, fields).await })
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(record))
}

pub async fn delete_record(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Record>> {
    let Path(id) = path?;
    let id = parse_id(&id)?;

    let store = state.store.clone();
    let record = run_to_completion(async move { store.delete(id).await })
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(record))
}

fn parse_id(raw: &str) -> AppResult<RecordId> {
    raw.parse::<RecordId>()
        .map_err(|_| AppError::invalid_input(format!("invalid id: {raw:?} is not an integer")))
}

/// Runs a store operation on its own task so a dropped connection cannot
/// abandon it halfway through its delay.
async fn run_to_completion<F>(operation: F) -> AppResult<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(operation).await.map_err(|err| {
        error!(error = %err, "store operation task failed");
        AppError::Internal
    })
}
