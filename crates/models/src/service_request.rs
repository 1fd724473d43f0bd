use sea_orm::{entity::prelude::*, QueryFilter, QueryOrder, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::customer::validate_email;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    description: &str,
    customer_name: &str,
    customer_email: &str,
) -> Result<Model, ModelError> {
    if description.trim().is_empty() {
        return Err(ModelError::Validation("description required".into()));
    }
    if customer_name.trim().is_empty() {
        return Err(ModelError::Validation("customer_name required".into()));
    }
    validate_email(customer_email)?;
    let am = ActiveModel {
        description: Set(description.to_string()),
        customer_name: Set(customer_name.to_string()),
        customer_email: Set(customer_email.trim().to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All requests filed under one email, oldest first.
pub async fn list_by_email(db: &DatabaseConnection, customer_email: &str) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::CustomerEmail.eq(customer_email))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
