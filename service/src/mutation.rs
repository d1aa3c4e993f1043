use ::entity::{astronaut, astronaut::Entity as Astronaut};
use dto::{AstronautForm, CreatedAstronaut};
use sea_orm::*;

use crate::ServiceError;

pub struct Mutation;

impl Mutation {
    /// Inserts the row as given; the origin planet is not looked up.
    pub async fn create_astronaut(
        db: &DbConn,
        form_data: AstronautForm,
    ) -> Result<CreatedAstronaut, DbErr> {
        let active_model = astronaut::ActiveModel {
            firstname: Set(form_data.firstname.to_owned()),
            lastname: Set(form_data.lastname.to_owned()),
            origin_planet_id: Set(form_data.origin_planet_id),
            ..Default::default()
        };
        let res = Astronaut::insert(active_model).exec(db).await?;

        tracing::debug!(id = res.last_insert_id, "astronaut inserted");
        Ok(CreatedAstronaut::new(res.last_insert_id, form_data))
    }

    pub async fn update_astronaut_by_id(
        db: &DbConn,
        id: i32,
        form_data: AstronautForm,
    ) -> Result<(), ServiceError> {
        let res = Astronaut::update_many()
            .set(astronaut::ActiveModel {
                firstname: Set(form_data.firstname),
                lastname: Set(form_data.lastname),
                origin_planet_id: Set(form_data.origin_planet_id),
                ..Default::default()
            })
            .filter(astronaut::Column::Id.eq(id))
            .exec(db)
            .await?;

        match res.rows_affected {
            0 => Err(ServiceError::NotFound),
            _ => Ok(()),
        }
    }

    pub async fn delete_astronaut(db: &DbConn, id: i32) -> Result<(), ServiceError> {
        let res = Astronaut::delete_by_id(id).exec(db).await?;

        match res.rows_affected {
            0 => Err(ServiceError::NotFound),
            _ => Ok(()),
        }
    }
}
