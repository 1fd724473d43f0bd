use sea_orm::DatabaseConnection;

use models::{customer, errors::ModelError};
use crate::errors::ServiceError;

/// Create a new customer. The email is stored trimmed + lowercased; a
/// case-insensitive duplicate surfaces as `Conflict`.
pub async fn create_customer(db: &DatabaseConnection, name: &str, email: &str) -> Result<customer::Model, ServiceError> {
    match customer::create(db, name, email).await {
        Ok(created) => Ok(created),
        Err(ModelError::Conflict(_)) => Err(ServiceError::Conflict("customer email already exists".into())),
        Err(e) => Err(e.into()),
    }
}

/// Get a non-deleted customer by id.
pub async fn get_customer(db: &DatabaseConnection, cust_id: i64) -> Result<customer::Model, ServiceError> {
    customer::find_active_by_id(db, cust_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer"))
}

/// Soft-delete a customer (marks deleted_at); already-deleted ids read as absent.
pub async fn soft_delete_customer(db: &DatabaseConnection, cust_id: i64) -> Result<(), ServiceError> {
    let found = customer::find_active_by_id(db, cust_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer"))?;
    customer::soft_delete(db, found).await?;
    Ok(())
}
