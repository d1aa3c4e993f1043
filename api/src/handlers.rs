use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use dto::{Astronaut, AstronautForm, CreatedAstronaut, MessageBody, Planet};
use spaceship_admin_service::{Mutation as MutationCore, Query as QueryCore};

use crate::AppState;
use crate::error::ApiError;
use crate::status::{Operation, Outcome};

type Reply<T> = Result<(StatusCode, Json<T>), ApiError>;

impl AppState {
    fn ok<T>(&self, operation: Operation, body: T) -> Reply<T> {
        Ok((self.policy.status(operation, Outcome::Success), Json(body)))
    }
}

pub async fn list_astronauts(state: State<AppState>) -> Reply<Vec<Astronaut>> {
    let operation = Operation::ListAstronauts;
    let astronauts = QueryCore::find_astronauts(&state.conn)
        .await
        .map_err(|err| ApiError::from_db(state.policy, operation, err))?;

    state.ok(operation, astronauts)
}

pub async fn get_astronaut(
    state: State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Reply<Astronaut> {
    let operation = Operation::GetAstronaut;
    let Path(id) = id.map_err(|rej| ApiError::rejected(state.policy, operation, rej.body_text()))?;
    let astronaut = QueryCore::find_astronaut_by_id(&state.conn, id)
        .await
        .map_err(|err| ApiError::new(state.policy, operation, err))?;

    state.ok(operation, astronaut)
}

pub async fn create_astronaut(
    state: State<AppState>,
    form: Result<Json<AstronautForm>, JsonRejection>,
) -> Reply<CreatedAstronaut> {
    let operation = Operation::CreateAstronaut;
    let Json(form) =
        form.map_err(|rej| ApiError::rejected(state.policy, operation, rej.body_text()))?;
    let created = MutationCore::create_astronaut(&state.conn, form)
        .await
        .map_err(|err| ApiError::from_db(state.policy, operation, err))?;

    tracing::info!(id = created.id, "astronaut created");
    state.ok(operation, created)
}

pub async fn update_astronaut(
    state: State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    form: Result<Json<AstronautForm>, JsonRejection>,
) -> Reply<MessageBody> {
    let operation = Operation::UpdateAstronaut;
    let Path(id) = id.map_err(|rej| ApiError::rejected(state.policy, operation, rej.body_text()))?;
    let Json(form) =
        form.map_err(|rej| ApiError::rejected(state.policy, operation, rej.body_text()))?;
    MutationCore::update_astronaut_by_id(&state.conn, id, form)
        .await
        .map_err(|err| ApiError::new(state.policy, operation, err))?;

    tracing::info!(id, "astronaut updated");
    state.ok(
        operation,
        MessageBody {
            message: "Astronaut updated successfully".to_owned(),
        },
    )
}

pub async fn delete_astronaut(
    state: State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Reply<MessageBody> {
    let operation = Operation::DeleteAstronaut;
    let Path(id) = id.map_err(|rej| ApiError::rejected(state.policy, operation, rej.body_text()))?;
    MutationCore::delete_astronaut(&state.conn, id)
        .await
        .map_err(|err| ApiError::new(state.policy, operation, err))?;

    tracing::info!(id, "astronaut deleted");
    state.ok(
        operation,
        MessageBody {
            message: "Astronaut deleted successfully".to_owned(),
        },
    )
}

pub async fn list_planets(state: State<AppState>) -> Reply<Vec<Planet>> {
    let operation = Operation::ListPlanets;
    let planets = QueryCore::find_planets(&state.conn)
        .await
        .map_err(|err| ApiError::from_db(state.policy, operation, err))?;

    state.ok(operation, planets)
}
