use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use service::job_order_service;
use models::job_order::{self, JobOrderStatus};

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct JobOrderCreate {
    pub cust_id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub customer_note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobOrderOut {
    pub job_order_id: i64,
    pub cust_id: i64,
    pub job_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub status: JobOrderStatus,
    pub customer_note: Option<String>,
}

impl From<job_order::Model> for JobOrderOut {
    fn from(m: job_order::Model) -> Self {
        Self {
            job_order_id: m.job_order_id,
            cust_id: m.cust_id,
            job_id: m.job_id,
            created_at: m.created_at,
            status: m.status,
            customer_note: m.customer_note,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<JobOrderCreate>,
) -> Result<(StatusCode, Json<JobOrderOut>), ApiError> {
    let created = job_order_service::create_job_order(
        &state.db,
        input.cust_id,
        input.job_id,
        input.customer_note,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobOrderOut>, ApiError> {
    let found = job_order_service::get_job_order(&state.db, id).await?;
    Ok(Json(found.into()))
}

pub async fn list_for_customer(
    State(state): State<AppState>,
    Path(cust_id): Path<i64>,
) -> Result<Json<Vec<JobOrderOut>>, ApiError> {
    let orders = job_order_service::list_customer_job_orders(&state.db, cust_id).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
