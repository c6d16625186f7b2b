use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_guild_record_table::GuildRecord;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessList::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessList::Id))
                    .col(string(AccessList::GuildId))
                    .col(string(AccessList::Kind))
                    .col(big_integer_null(AccessList::CaseNumber))
                    .col(timestamp(AccessList::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_list_guild_id")
                            .from(AccessList::Table, AccessList::GuildId)
                            .to(GuildRecord::Table, GuildRecord::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One allow list and one deny list per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_access_list_guild_id_kind")
                    .table(AccessList::Table)
                    .col(AccessList::GuildId)
                    .col(AccessList::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_access_list_guild_id_kind")
                    .table(AccessList::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccessList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessList {
    Table,
    Id,
    GuildId,
    Kind,
    CaseNumber,
    UpdatedAt,
}
