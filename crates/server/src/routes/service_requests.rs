use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use service::service_request_service;
use models::service_request;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ServiceRequestCreate {
    pub description: String,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceRequestOut {
    pub id: i64,
    pub description: String,
    pub customer_name: String,
    pub customer_email: String,
}

impl From<service_request::Model> for ServiceRequestOut {
    fn from(m: service_request::Model) -> Self {
        Self {
            id: m.id,
            description: m.description,
            customer_name: m.customer_name,
            customer_email: m.customer_email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub customer_email: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ServiceRequestCreate>,
) -> Result<(StatusCode, Json<ServiceRequestOut>), ApiError> {
    let created = service_request_service::create_service_request(
        &state.db,
        &input.description,
        &input.customer_name,
        &input.customer_email,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceRequestOut>, ApiError> {
    let found = service_request_service::get_service_request(&state.db, id).await?;
    Ok(Json(found.into()))
}

pub async fn list_by_email(
    State(state): State<AppState>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<Vec<ServiceRequestOut>>, ApiError> {
    let rows = service_request_service::list_by_customer_email(&state.db, &q.customer_email).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
