//! Migration: Create the order table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Order::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Order::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Order::Description).text().not_null())
                    .col(ColumnDef::new(Order::StartDate).date().not_null())
                    .col(ColumnDef::new(Order::EndDate).date().not_null())
                    .col(ColumnDef::new(Order::Price).integer().not_null())
                    .col(ColumnDef::new(Order::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Order::ExecutorId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer")
                            .from(Order::Table, Order::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_executor")
                            .from(Order::Table, Order::ExecutorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Order {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Price,
    CustomerId,
    ExecutorId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
