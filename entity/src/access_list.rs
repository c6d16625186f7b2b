use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    /// `allow` or `deny`
    pub kind: String,
    pub case_number: Option<i64>,
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
