use sea_orm::{entity::prelude::*, QueryFilter, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cust_id: i64,
    pub cust_name: String,
    pub cust_email: String,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let ok = email
        .trim()
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        })
        .unwrap_or(false);
    if !ok {
        return Err(ModelError::Validation(format!("invalid email: {}", email.trim())));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

/// Emails are stored trimmed and lowercased; the unique constraint then
/// covers case-insensitive duplicates.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn create(db: &DatabaseConnection, name: &str, email: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    let am = ActiveModel {
        cust_name: Set(name.to_string()),
        cust_email: Set(normalize_email(email)),
        deleted_at: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Lookup by id, excluding soft-deleted rows.
pub async fn find_active_by_id(db: &DatabaseConnection, cust_id: i64) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(cust_id)
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await?;
    Ok(found)
}

pub async fn exists_active(db: &DatabaseConnection, cust_id: i64) -> Result<bool, ModelError> {
    Ok(find_active_by_id(db, cust_id).await?.is_some())
}

/// Soft-delete a customer (marks deleted_at). The row keeps its email slot.
pub async fn soft_delete(db: &DatabaseConnection, found: Model) -> Result<(), ModelError> {
    let mut am: ActiveModel = found.into();
    am.deleted_at = Set(Some(Utc::now().into()));
    am.update(db).await?;
    Ok(())
}
