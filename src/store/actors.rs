use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{actor, cast_member, production},
    error::AppResult,
    models::{ActorChanges, NewActor},
    now_sec,
};

#[derive(Clone, Debug)]
pub struct ActorDetail {
    pub actor: actor::Model,
    pub cast_members: Vec<cast_member::Model>,
    pub productions: Vec<production::Model>,
}

pub struct ActorRepo<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActorRepo<'a> {
    pub(super) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<ActorDetail>> {
        let actors = actor::Entity::find().order_by_asc(actor::Column::Id).all(self.db).await?;
        self.with_roles(actors).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<ActorDetail>> {
        let Some(found) = actor::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_roles(vec![found]).await?.pop())
    }

    pub async fn create(&self, new: NewActor) -> AppResult<actor::Model> {
        let model = new.into_active_model(now_sec())?;
        Ok(model.insert(self.db).await?)
    }

    pub async fn update(&self, id: i32, changes: ActorChanges) -> AppResult<Option<actor::Model>> {
        let Some(found) = actor::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let mut model = found.into_active_model();
        changes.apply(&mut model)?;
        model.updated_at = Set(Some(now_sec()));
        Ok(Some(model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        cast_member::Entity::delete_many()
            .filter(cast_member::Column::ActorId.eq(id))
            .exec(&txn)
            .await?;
        let res = actor::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn with_roles(&self, actors: Vec<actor::Model>) -> AppResult<Vec<ActorDetail>> {
        let cast = actors.load_many(cast_member::Entity, self.db).await?;
        let productions =
            actors.load_many_to_many(production::Entity, cast_member::Entity, self.db).await?;

        Ok(actors
            .into_iter()
            .zip(cast)
            .zip(productions)
            .map(|((actor, cast_members), productions)| ActorDetail {
                actor,
                cast_members,
                productions,
            })
            .collect())
    }
}
