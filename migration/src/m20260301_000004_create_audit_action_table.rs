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
                    .table(AuditAction::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditAction::Id))
                    .col(string(AuditAction::GuildId))
                    .col(string(AuditAction::TargetId))
                    .col(string(AuditAction::TargetName))
                    .col(string(AuditAction::ExecutorId))
                    .col(string(AuditAction::ExecutorName))
                    .col(string(AuditAction::ActionType))
                    .col(text_null(AuditAction::Reason))
                    .col(big_integer_uniq(AuditAction::CaseNumber))
                    .col(timestamp(AuditAction::CreatedAt))
                    .col(timestamp(AuditAction::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_action_guild_id")
                            .from(AuditAction::Table, AuditAction::GuildId)
                            .to(GuildRecord::Table, GuildRecord::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AuditAction {
    Table,
    Id,
    GuildId,
    TargetId,
    TargetName,
    ExecutorId,
    ExecutorName,
    ActionType,
    Reason,
    CaseNumber,
    CreatedAt,
    UpdatedAt,
}
