//! Create `job_orders` table.
//!
//! `cust_id` and `job_id` are validated by service-layer existence checks;
//! no database foreign keys are declared for them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobOrders::JobOrderId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(JobOrders::CustId).not_null())
                    .col(big_integer(JobOrders::JobId).not_null())
                    .col(timestamp_with_time_zone(JobOrders::CreatedAt).not_null())
                    .col(string_len(JobOrders::Status, 32).not_null().default("NEW"))
                    .col(ColumnDef::new(JobOrders::CustomerNote).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(JobOrders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum JobOrders { Table, JobOrderId, CustId, JobId, CreatedAt, Status, CustomerNote }
