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
                    .table(AccessEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessEntry::Id))
                    .col(string(AccessEntry::GuildId))
                    .col(string(AccessEntry::ListKind))
                    .col(string_null(AccessEntry::CommandName))
                    .col(string(AccessEntry::TargetKind))
                    .col(string(AccessEntry::TargetId))
                    .col(string(AccessEntry::Name))
                    .col(timestamp(AccessEntry::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_entry_guild_id")
                            .from(AccessEntry::Table, AccessEntry::GuildId)
                            .to(GuildRecord::Table, GuildRecord::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Membership checks always filter by guild and list first
        manager
            .create_index(
                Index::create()
                    .name("idx_access_entry_guild_id_list_kind")
                    .table(AccessEntry::Table)
                    .col(AccessEntry::GuildId)
                    .col(AccessEntry::ListKind)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_access_entry_guild_id_list_kind")
                    .table(AccessEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccessEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccessEntry {
    Table,
    Id,
    GuildId,
    ListKind,
    CommandName,
    TargetKind,
    TargetId,
    Name,
    CreatedAt,
}
