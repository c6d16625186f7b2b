use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub guild_name: String,
    pub created_by_id: String,
    pub created_by_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_list::Entity")]
    AccessList,
    #[sea_orm(has_many = "super::access_entry::Entity")]
    AccessEntry,
    #[sea_orm(has_many = "super::audit_action::Entity")]
    AuditAction,
}

impl Related<super::access_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessList.def()
    }
}

impl Related<super::access_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessEntry.def()
    }
}

impl Related<super::audit_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditAction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
