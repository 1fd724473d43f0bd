use sea_orm::DatabaseConnection;
use tracing::warn;

use models::{customer, job, job_order};
use crate::errors::ServiceError;

/// Create a job order after checking both references. Either failing
/// pre-check rejects the request naming the invalid reference, and the
/// insert is never attempted.
///
/// The pre-checks and the insert are separate statements; a concurrent
/// delete of the referenced customer in between is not guarded against.
pub async fn create_job_order(
    db: &DatabaseConnection,
    cust_id: i64,
    job_id: i64,
    customer_note: Option<String>,
) -> Result<job_order::Model, ServiceError> {
    if !customer::exists_active(db, cust_id).await? {
        warn!(cust_id, "job order rejected: unknown or deleted customer");
        return Err(ServiceError::Validation(format!("invalid cust_id: {}", cust_id)));
    }
    if !job::exists(db, job_id).await? {
        warn!(job_id, "job order rejected: unknown job");
        return Err(ServiceError::Validation(format!("invalid job_id: {}", job_id)));
    }
    Ok(job_order::create(db, cust_id, job_id, customer_note).await?)
}

/// Get a job order by id.
pub async fn get_job_order(db: &DatabaseConnection, job_order_id: i64) -> Result<job_order::Model, ServiceError> {
    job_order::find_by_id(db, job_order_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("job order"))
}

/// Orders of one customer, newest first. An unknown or deleted customer is
/// a not-found error, never an empty list.
pub async fn list_customer_job_orders(db: &DatabaseConnection, cust_id: i64) -> Result<Vec<job_order::Model>, ServiceError> {
    if !customer::exists_active(db, cust_id).await? {
        return Err(ServiceError::not_found("customer"));
    }
    Ok(job_order::list_by_customer(db, cust_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::job_order::JobOrderStatus;
    use uuid::Uuid;
    use crate::{customer_service, job_service, test_support};

    #[tokio::test]
    async fn job_order_lifecycle() -> Result<(), anyhow::Error> {
        let Some(db) = test_support::get_db().await else { return Ok(()) };

        let c = customer_service::create_customer(
            &db,
            "Order Customer",
            &format!("orders_{}@example.com", Uuid::new_v4()),
        )
        .await?;
        let j = job_service::create_job(&db, &format!("Mow Lawn {}", Uuid::new_v4())).await?;

        let first = create_job_order(&db, c.cust_id, j.job_id, None).await?;
        assert_eq!(first.status, JobOrderStatus::New);
        assert_eq!(first.customer_note, None);

        let second = create_job_order(&db, c.cust_id, j.job_id, Some("back gate".into())).await?;
        assert_eq!(second.customer_note.as_deref(), Some("back gate"));

        let fetched = get_job_order(&db, first.job_order_id).await?;
        assert_eq!(fetched.cust_id, c.cust_id);

        // newest first
        let listed = list_customer_job_orders(&db, c.cust_id).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].job_order_id, second.job_order_id);
        assert!(listed[0].created_at >= listed[1].created_at);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_references_are_rejected_before_insert() -> Result<(), anyhow::Error> {
        let Some(db) = test_support::get_db().await else { return Ok(()) };

        let c = customer_service::create_customer(
            &db,
            "Ref Customer",
            &format!("refs_{}@example.com", Uuid::new_v4()),
        )
        .await?;
        let j = job_service::create_job(&db, &format!("Trim Hedge {}", Uuid::new_v4())).await?;

        let bad_cust = create_job_order(&db, i64::MAX, j.job_id, None).await;
        assert!(matches!(bad_cust, Err(ServiceError::Validation(_))));

        let bad_job = create_job_order(&db, c.cust_id, i64::MAX, None).await;
        assert!(matches!(bad_job, Err(ServiceError::Validation(_))));

        // a soft-deleted customer no longer passes the pre-check
        customer_service::soft_delete_customer(&db, c.cust_id).await?;
        let deleted_cust = create_job_order(&db, c.cust_id, j.job_id, None).await;
        assert!(matches!(deleted_cust, Err(ServiceError::Validation(_))));

        // and its listing turns into not-found rather than an empty list
        let listing = list_customer_job_orders(&db, c.cust_id).await;
        assert!(matches!(listing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
