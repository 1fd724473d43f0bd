use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use service::job_service;
use models::job;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct JobCreate {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct JobOut {
    pub job_id: i64,
    pub job_title: String,
}

impl From<job::Model> for JobOut {
    fn from(m: job::Model) -> Self {
        Self { job_id: m.job_id, job_title: m.job_title }
    }
}

#[derive(Debug, Deserialize)]
pub struct JobsByQuery {
    pub job_id: Option<i64>,
    pub job_title: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<JobCreate>,
) -> Result<(StatusCode, Json<JobOut>), ApiError> {
    let created = job_service::create_job(&state.db, &input.job_title).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobOut>, ApiError> {
    let found = job_service::get_job(&state.db, id).await?;
    Ok(Json(found.into()))
}

/// `/jobs_By`: exact numeric key wins; otherwise partial case-insensitive
/// title match. Neither given is a client error before any query runs.
pub async fn get_by_any(
    State(state): State<AppState>,
    Query(q): Query<JobsByQuery>,
) -> Result<Json<JobOut>, ApiError> {
    let found = job_service::get_job_by(&state.db, q.job_id, q.job_title.as_deref()).await?;
    Ok(Json(found.into()))
}
