use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{actor, cast_member, production},
    error::AppResult,
    models::{NewProduction, ProductionChanges},
    now_sec,
};

#[derive(Clone, Debug)]
pub struct ProductionDetail {
    pub production: production::Model,
    pub cast_members: Vec<cast_member::Model>,
    pub actors: Vec<actor::Model>,
}

pub struct ProductionRepo<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductionRepo<'a> {
    pub(super) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<ProductionDetail>> {
        let productions =
            production::Entity::find().order_by_asc(production::Column::Id).all(self.db).await?;
        self.with_cast(productions).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<ProductionDetail>> {
        let Some(found) = production::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_cast(vec![found]).await?.pop())
    }

    pub async fn create(&self, new: NewProduction) -> AppResult<production::Model> {
        let model = new.into_active_model(now_sec())?;
        Ok(model.insert(self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        changes: ProductionChanges,
    ) -> AppResult<Option<production::Model>> {
        let Some(found) = production::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let mut model = found.into_active_model();
        changes.apply(&mut model)?;
        model.updated_at = Set(Some(now_sec()));
        Ok(Some(model.update(self.db).await?))
    }

    /// Removes the production and its cast members together; `false` when no such row.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        cast_member::Entity::delete_many()
            .filter(cast_member::Column::ProductionId.eq(id))
            .exec(&txn)
            .await?;
        let res = production::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn clear(&self) -> AppResult<u64> {
        let txn = self.db.begin().await?;
        cast_member::Entity::delete_many().exec(&txn).await?;
        let res = production::Entity::delete_many().exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected)
    }

    async fn with_cast(
        &self,
        productions: Vec<production::Model>,
    ) -> AppResult<Vec<ProductionDetail>> {
        let cast = productions.load_many(cast_member::Entity, self.db).await?;
        let actors =
            productions.load_many_to_many(actor::Entity, cast_member::Entity, self.db).await?;

        Ok(productions
            .into_iter()
            .zip(cast)
            .zip(actors)
            .map(|((production, cast_members), actors)| ProductionDetail {
                production,
                cast_members,
                actors,
            })
            .collect())
    }
}
