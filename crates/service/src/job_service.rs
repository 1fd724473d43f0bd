use sea_orm::DatabaseConnection;

use models::{errors::ModelError, job};
use crate::errors::ServiceError;

/// Create a new job. Titles are trimmed; a duplicate title surfaces as `Conflict`.
pub async fn create_job(db: &DatabaseConnection, title: &str) -> Result<job::Model, ServiceError> {
    match job::create(db, title).await {
        Ok(created) => Ok(created),
        Err(ModelError::Conflict(_)) => Err(ServiceError::Conflict("job title already exists".into())),
        Err(e) => Err(e.into()),
    }
}

/// Get a job by id.
pub async fn get_job(db: &DatabaseConnection, job_id: i64) -> Result<job::Model, ServiceError> {
    job::find_by_id(db, job_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("job"))
}

/// Lookup by either field: an exact numeric key takes precedence; otherwise a
/// partial case-insensitive title match. Neither given (or a blank title) is a
/// validation error, checked before any query.
pub async fn get_job_by(
    db: &DatabaseConnection,
    job_id: Option<i64>,
    job_title: Option<&str>,
) -> Result<job::Model, ServiceError> {
    let title = job_title.map(str::trim).filter(|t| !t.is_empty());
    match (job_id, title) {
        (None, None) => Err(ServiceError::Validation("provide job_id or job_title".into())),
        (Some(id), _) => job::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("job")),
        (None, Some(t)) => job::find_by_title_pattern(db, t)
            .await?
            .ok_or_else(|| ServiceError::not_found("job")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use crate::test_support;

    #[tokio::test]
    async fn job_create_and_lookups() -> Result<(), anyhow::Error> {
        let Some(db) = test_support::get_db().await else { return Ok(()) };

        let tag = Uuid::new_v4().to_string();
        let title = format!("Paint Fence {}", tag.to_uppercase());
        let j = create_job(&db, &format!("  {}  ", title)).await?;
        assert_eq!(j.job_title, title);

        let by_id = get_job(&db, j.job_id).await?;
        assert_eq!(by_id.job_title, title);

        // substring match is case-insensitive
        let by_title = get_job_by(&db, None, Some(&format!("fence {}", tag))).await?;
        assert_eq!(by_title.job_id, j.job_id);

        // numeric key wins over any title filter
        let by_both = get_job_by(&db, Some(j.job_id), Some("no such job anywhere")).await?;
        assert_eq!(by_both.job_id, j.job_id);

        let dup = create_job(&db, &title).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn lookup_with_neither_field_is_rejected_without_touching_db() -> Result<(), anyhow::Error> {
        let db = sea_orm::DatabaseConnection::default();
        let res = get_job_by(&db, None, None).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        // a blank title counts as absent
        let res = get_job_by(&db, None, Some("   ")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
