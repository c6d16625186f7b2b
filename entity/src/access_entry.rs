use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    /// `allow` or `deny`
    pub list_kind: String,
    /// `None` for guild-wide entries
    pub command_name: Option<String>,
    /// `account`, `role` or `channel`
    pub target_kind: String,
    pub target_id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_record::Entity",
        from = "Column::GuildId",
        to = "super::guild_record::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildRecord,
}

impl Related<super::guild_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
