use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{entities::user, error::AppResult, models::NewUser, now_sec};

pub struct UserRepo<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepo<'a> {
    pub(super) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewUser) -> AppResult<user::Model> {
        let model = new.into_active_model(now_sec())?;
        Ok(model.insert(self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(self.db).await?)
    }

    /// Names are not unique; the earliest signup wins.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .order_by_asc(user::Column::Id)
            .one(self.db)
            .await?)
    }
}
