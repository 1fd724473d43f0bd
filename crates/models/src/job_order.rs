use sea_orm::{entity::prelude::*, QueryFilter, QueryOrder, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{customer, job};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub job_order_id: i64,
    pub cust_id: i64,
    pub job_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub status: JobOrderStatus,
    pub customer_note: Option<String>,
}

/// Fixed status lifecycle; new orders always start at NEW.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobOrderStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "DONE")]
    Done,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    Job,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustId)
                .to(customer::Column::CustId)
                .into(),
            Relation::Job => Entity::belongs_to(job::Entity)
                .from(Column::JobId)
                .to(job::Column::JobId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new order. Referential checks against `customers` and `jobs`
/// happen in the service layer before this is called.
pub async fn create(
    db: &DatabaseConnection,
    cust_id: i64,
    job_id: i64,
    customer_note: Option<String>,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        cust_id: Set(cust_id),
        job_id: Set(job_id),
        created_at: Set(Utc::now().into()),
        status: Set(JobOrderStatus::New),
        customer_note: Set(customer_note),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, job_order_id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(job_order_id).one(db).await?)
}

/// All orders of one customer, newest first.
pub async fn list_by_customer(db: &DatabaseConnection, cust_id: i64) -> Result<Vec<Model>, ModelError> {
    let orders = Entity::find()
        .filter(Column::CustId.eq(cust_id))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(orders)
}
