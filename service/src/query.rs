use ::entity::{astronaut, image, planet};
use dto::{Astronaut, Image, Planet};
use sea_orm::*;

use crate::ServiceError;

/// One flat row of `astronauts ⋈ planets ⋈ images`
#[derive(Debug, FromQueryResult)]
struct AstronautRow {
    id: i32,
    firstname: String,
    lastname: String,
    origin_planet_id: i32,
    planet_name: String,
    is_habitable: bool,
    description: String,
    image_path: String,
    image_name: String,
}

impl From<AstronautRow> for Astronaut {
    fn from(row: AstronautRow) -> Self {
        Self {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            origin_planet: Planet {
                id: row.origin_planet_id,
                name: row.planet_name,
                is_habitable: row.is_habitable,
                description: row.description,
                image: Image {
                    path: row.image_path,
                    name: row.image_name,
                },
            },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct PlanetRow {
    id: i32,
    name: String,
    is_habitable: bool,
    description: String,
    image_path: String,
    image_name: String,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_habitable: row.is_habitable,
            description: row.description,
            image: Image {
                path: row.image_path,
                name: row.image_name,
            },
        }
    }
}

// Inner joins on both hops: an astronaut whose planet or image is missing
// yields no row at all.
fn astronauts_with_origin() -> Select<astronaut::Entity> {
    astronaut::Entity::find()
        .select_only()
        .column(astronaut::Column::Id)
        .column(astronaut::Column::Firstname)
        .column(astronaut::Column::Lastname)
        .column_as(planet::Column::Id, "origin_planet_id")
        .column_as(planet::Column::Name, "planet_name")
        .column_as(planet::Column::IsHabitable, "is_habitable")
        .column_as(planet::Column::Description, "description")
        .column_as(image::Column::Path, "image_path")
        .column_as(image::Column::Name, "image_name")
        .join(JoinType::InnerJoin, astronaut::Relation::Planet.def())
        .join(JoinType::InnerJoin, planet::Relation::Image.def())
}

pub struct Query;

impl Query {
    pub async fn find_astronauts(db: &DbConn) -> Result<Vec<Astronaut>, DbErr> {
        let rows = astronauts_with_origin()
            .order_by_asc(astronaut::Column::Id)
            .into_model::<AstronautRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Astronaut::from).collect())
    }

    pub async fn find_astronaut_by_id(db: &DbConn, id: i32) -> Result<Astronaut, ServiceError> {
        astronauts_with_origin()
            .filter(astronaut::Column::Id.eq(id))
            .into_model::<AstronautRow>()
            .one(db)
            .await?
            .map(Astronaut::from)
            .ok_or(ServiceError::NotFound)
    }

    pub async fn find_planets(db: &DbConn) -> Result<Vec<Planet>, DbErr> {
        let rows = planet::Entity::find()
            .select_only()
            .column(planet::Column::Id)
            .column(planet::Column::Name)
            .column(planet::Column::IsHabitable)
            .column(planet::Column::Description)
            .column_as(image::Column::Path, "image_path")
            .column_as(image::Column::Name, "image_name")
            .join(JoinType::InnerJoin, planet::Relation::Image.def())
            .order_by_asc(planet::Column::Id)
            .into_model::<PlanetRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }
}
