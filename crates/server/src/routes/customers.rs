use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use service::customer_service;
use models::customer;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CustomerCreate {
    pub cust_name: String,
    pub cust_email: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerOut {
    pub cust_id: i64,
    pub cust_name: String,
    pub cust_email: String,
}

impl From<customer::Model> for CustomerOut {
    fn from(m: customer::Model) -> Self {
        Self { cust_id: m.cust_id, cust_name: m.cust_name, cust_email: m.cust_email }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CustomerCreate>,
) -> Result<(StatusCode, Json<CustomerOut>), ApiError> {
    let created = customer_service::create_customer(&state.db, &input.cust_name, &input.cust_email).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerOut>, ApiError> {
    let found = customer_service::get_customer(&state.db, id).await?;
    Ok(Json(found.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    customer_service::soft_delete_customer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
