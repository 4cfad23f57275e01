//! One repository per entity over an injected connection.

mod actors;
mod cast_members;
mod productions;
mod users;

use sea_orm::DatabaseConnection;

pub use actors::{ActorDetail, ActorRepo};
pub use cast_members::{CastMemberDetail, CastMemberRepo};
pub use productions::{ProductionDetail, ProductionRepo};
pub use users::UserRepo;

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn productions(&self) -> ProductionRepo<'_> {
        ProductionRepo::new(&self.db)
    }

    pub fn actors(&self) -> ActorRepo<'_> {
        ActorRepo::new(&self.db)
    }

    pub fn cast_members(&self) -> CastMemberRepo<'_> {
        CastMemberRepo::new(&self.db)
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.db)
    }
}
