use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseCounter::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseCounter::Id))
                    .col(string_uniq(CaseCounter::Name))
                    .col(big_integer(CaseCounter::Seq).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseCounter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CaseCounter {
    Table,
    Id,
    Name,
    Seq,
}
