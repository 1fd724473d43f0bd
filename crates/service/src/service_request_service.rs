use sea_orm::DatabaseConnection;

use models::service_request;
use crate::errors::ServiceError;

/// File a new service request. The returned row echoes the generated id.
pub async fn create_service_request(
    db: &DatabaseConnection,
    description: &str,
    customer_name: &str,
    customer_email: &str,
) -> Result<service_request::Model, ServiceError> {
    Ok(service_request::create(db, description, customer_name, customer_email).await?)
}

/// Get a service request by id.
pub async fn get_service_request(db: &DatabaseConnection, id: i64) -> Result<service_request::Model, ServiceError> {
    service_request::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("service request"))
}

/// All requests filed under one email, oldest first.
pub async fn list_by_customer_email(db: &DatabaseConnection, customer_email: &str) -> Result<Vec<service_request::Model>, ServiceError> {
    Ok(service_request::list_by_email(db, customer_email).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use crate::test_support;

    #[tokio::test]
    async fn service_request_roundtrip_and_listing() -> Result<(), anyhow::Error> {
        let Some(db) = test_support::get_db().await else { return Ok(()) };

        let email = format!("sr_{}@example.com", Uuid::new_v4());
        let created = create_service_request(&db, "Leaky faucet", "Pat Doe", &email).await?;
        assert_eq!(created.description, "Leaky faucet");
        assert_eq!(created.customer_name, "Pat Doe");
        assert_eq!(created.customer_email, email);

        let fetched = get_service_request(&db, created.id).await?;
        assert_eq!(fetched, created);

        let second = create_service_request(&db, "Broken window", "Pat Doe", &email).await?;
        let listed = list_by_customer_email(&db, &email).await?;
        assert_eq!(listed.len(), 2);
        // oldest first
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[1].id, second.id);

        let missing = get_service_request(&db, i64::MAX).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
