use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_action")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub target_id: String,
    pub target_name: String,
    pub executor_id: String,
    pub executor_name: String,
    /// `mute`, `kick` or `ban`
    pub action_type: String,
    pub reason: Option<String>,
    #[sea_orm(unique)]
    pub case_number: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
