use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Reference columns carry no database-level foreign key: the entities declare
// the relations, and the inner join is what hides dangling rows.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(pk_auto(Images::Id))
                    .col(string(Images::Path))
                    .col(string(Images::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string(Planets::Name))
                    .col(text(Planets::Description))
                    .col(ColumnDef::new(Planets::IsHabitable).boolean().not_null())
                    .col(integer(Planets::ImageId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Astronauts::Table)
                    .if_not_exists()
                    .col(pk_auto(Astronauts::Id))
                    .col(string(Astronauts::Firstname))
                    .col(string(Astronauts::Lastname))
                    .col(integer(Astronauts::OriginPlanetId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Astronauts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Images {
    Table,
    Id,
    Path,
    Name,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Description,
    IsHabitable,
    ImageId,
}

#[derive(DeriveIden)]
enum Astronauts {
    Table,
    Id,
    Firstname,
    Lastname,
    OriginPlanetId,
}
