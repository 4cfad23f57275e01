use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productions::Table)
                    .if_not_exists()
                    .col(pk_auto(Productions::Id))
                    .col(string_uniq(Productions::Title))
                    .col(string(Productions::Genre))
                    .col(double_null(Productions::Budget))
                    .col(string_null(Productions::Image))
                    .col(string_null(Productions::Director))
                    .col(string_null(Productions::Description))
                    .col(boolean(Productions::Ongoing).default(true))
                    .col(big_integer(Productions::CreatedAt))
                    .col(big_integer_null(Productions::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(pk_auto(Actors::Id))
                    .col(string(Actors::Name))
                    .col(string_null(Actors::Email))
                    .col(big_integer(Actors::CreatedAt))
                    .col(big_integer_null(Actors::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CastMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(CastMembers::Id))
                    .col(string_null(CastMembers::Name))
                    .col(string_null(CastMembers::Role))
                    .col(integer(CastMembers::ProductionId))
                    .col(integer(CastMembers::ActorId))
                    .col(big_integer(CastMembers::CreatedAt))
                    .col(big_integer_null(CastMembers::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cast_members_production")
                            .from(CastMembers::Table, CastMembers::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cast_members_actor")
                            .from(CastMembers::Table, CastMembers::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cast_members_production_id")
                    .table(CastMembers::Table)
                    .col(CastMembers::ProductionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cast_members_actor_id")
                    .table(CastMembers::Table)
                    .col(CastMembers::ActorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string_null(Users::Email))
                    .col(big_integer(Users::CreatedAt))
                    .col(big_integer_null(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_name")
                    .table(Users::Table)
                    .col(Users::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(CastMembers::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Productions::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Productions {
    Table,
    Id,
    Title,
    Genre,
    Budget,
    Image,
    Director,
    Description,
    Ongoing,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CastMembers {
    Table,
    Id,
    Name,
    Role,
    ProductionId,
    ActorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}
