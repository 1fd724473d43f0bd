use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::prelude::*, QueryFilter, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub job_id: i64,
    pub job_title: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, title: &str) -> Result<Model, ModelError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ModelError::Validation("job_title required".into()));
    }
    let am = ActiveModel {
        job_title: Set(title.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, job_id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(job_id).one(db).await?)
}

pub async fn exists(db: &DatabaseConnection, job_id: i64) -> Result<bool, ModelError> {
    Ok(find_by_id(db, job_id).await?.is_some())
}

/// First job whose title contains `pattern`, case-insensitively (ILIKE with
/// wildcards on both sides).
pub async fn find_by_title_pattern(db: &DatabaseConnection, pattern: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Expr::col(Column::JobTitle).ilike(format!("%{}%", pattern.trim())))
        .one(db)
        .await?;
    Ok(found)
}
