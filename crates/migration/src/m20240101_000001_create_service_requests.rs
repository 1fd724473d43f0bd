//! Create `service_requests` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text(ServiceRequests::Description).not_null())
                    .col(string_len(ServiceRequests::CustomerName, 255).not_null())
                    .col(string_len(ServiceRequests::CustomerEmail, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceRequests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceRequests { Table, Id, Description, CustomerName, CustomerEmail }
