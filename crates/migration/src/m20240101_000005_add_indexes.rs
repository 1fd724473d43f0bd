use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // JobOrders: index on cust_id for the per-customer listing
        manager
            .create_index(
                Index::create()
                    .name("idx_job_orders_cust")
                    .table(JobOrders::Table)
                    .col(JobOrders::CustId)
                    .to_owned(),
            )
            .await?;

        // JobOrders: index on created_at for the descending sort
        manager
            .create_index(
                Index::create()
                    .name("idx_job_orders_created_at")
                    .table(JobOrders::Table)
                    .col(JobOrders::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ServiceRequests: index on customer_email for the email lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_service_requests_email")
                    .table(ServiceRequests::Table)
                    .col(ServiceRequests::CustomerEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_job_orders_cust").table(JobOrders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_job_orders_created_at").table(JobOrders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_requests_email").table(ServiceRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobOrders { Table, CustId, CreatedAt }

#[derive(DeriveIden)]
enum ServiceRequests { Table, CustomerEmail }
