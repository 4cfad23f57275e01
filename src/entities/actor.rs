use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cast_member::Entity")]
    CastMember,
}

impl Related<super::cast_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CastMember.def()
    }
}

impl Related<super::production::Entity> for Entity {
    fn to() -> RelationDef {
        super::cast_member::Relation::Production.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cast_member::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
