use entity::{image, planet};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

const CATALOGUE: [(&str, &str, bool, &str); 4] = [
    (
        "Earth",
        "The cradle of the crew. Breathable, crowded, familiar.",
        true,
        "/images/planets/earth.png",
    ),
    (
        "Mars",
        "Thin air, red dust and the oldest outpost of the fleet.",
        false,
        "/images/planets/mars.png",
    ),
    (
        "Kepler-442b",
        "A temperate super-Earth in its star's habitable zone.",
        true,
        "/images/planets/kepler-442b.png",
    ),
    (
        "Neptune",
        "Ice giant with supersonic winds. Nobody lands here.",
        false,
        "/images/planets/neptune.png",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, description, is_habitable, path) in CATALOGUE {
            let image = image::ActiveModel {
                path: Set(path.to_owned()),
                name: Set(name.to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;

            planet::ActiveModel {
                name: Set(name.to_owned()),
                description: Set(description.to_owned()),
                is_habitable: Set(is_habitable),
                image_id: Set(image.id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        tracing::info!(planets = CATALOGUE.len(), "planet catalogue seeded");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names: Vec<&str> = CATALOGUE.iter().map(|(name, ..)| *name).collect();
        planet::Entity::delete_many()
            .filter(planet::Column::Name.is_in(names.clone()))
            .exec(db)
            .await?;
        image::Entity::delete_many()
            .filter(image::Column::Name.is_in(names))
            .exec(db)
            .await?;

        tracing::info!("planet catalogue removed");
        Ok(())
    }
}
