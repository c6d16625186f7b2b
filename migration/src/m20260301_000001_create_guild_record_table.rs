use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildRecord::Id))
                    .col(string_uniq(GuildRecord::GuildId))
                    .col(string(GuildRecord::GuildName))
                    .col(string(GuildRecord::CreatedById))
                    .col(string(GuildRecord::CreatedByName))
                    .col(timestamp(GuildRecord::CreatedAt))
                    .col(timestamp(GuildRecord::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRecord {
    Table,
    Id,
    GuildId,
    GuildName,
    CreatedById,
    CreatedByName,
    CreatedAt,
    UpdatedAt,
}
