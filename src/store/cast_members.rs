use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait, QueryOrder,
    Set,
};

use crate::{
    entities::{actor, cast_member, production},
    error::AppResult,
    models::{CastMemberChanges, NewCastMember},
    now_sec,
};

#[derive(Clone, Debug)]
pub struct CastMemberDetail {
    pub cast_member: cast_member::Model,
    pub production: Option<production::Model>,
    pub actor: Option<actor::Model>,
}

pub struct CastMemberRepo<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CastMemberRepo<'a> {
    pub(super) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<CastMemberDetail>> {
        let cast = cast_member::Entity::find()
            .order_by_asc(cast_member::Column::Id)
            .all(self.db)
            .await?;
        self.with_links(cast).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<CastMemberDetail>> {
        let Some(found) = cast_member::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_links(vec![found]).await?.pop())
    }

    /// Dangling production or actor ids surface as foreign key violations from the store.
    pub async fn create(&self, new: NewCastMember) -> AppResult<CastMemberDetail> {
        let created = new.into_active_model(now_sec()).insert(self.db).await?;
        let mut linked = self.with_links(vec![created]).await?;
        linked.pop().ok_or_else(|| anyhow::anyhow!("inserted cast member vanished").into())
    }

    pub async fn update(
        &self,
        id: i32,
        changes: CastMemberChanges,
    ) -> AppResult<Option<cast_member::Model>> {
        let Some(found) = cast_member::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let mut model = found.into_active_model();
        changes.apply(&mut model);
        model.updated_at = Set(Some(now_sec()));
        Ok(Some(model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let res = cast_member::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn with_links(&self, cast: Vec<cast_member::Model>) -> AppResult<Vec<CastMemberDetail>> {
        let productions = cast.load_one(production::Entity, self.db).await?;
        let actors = cast.load_one(actor::Entity, self.db).await?;

        Ok(cast
            .into_iter()
            .zip(productions)
            .zip(actors)
            .map(|((cast_member, production), actor)| CastMemberDetail {
                cast_member,
                production,
                actor,
            })
            .collect())
    }
}
