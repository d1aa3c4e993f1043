use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    pub path: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub is_habitable: bool,
    pub description: String,
    pub image: Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Astronaut {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub origin_planet: Planet,
}

/// Body of `POST /astronauts` and `PUT|PATCH /astronauts/{id}`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronautForm {
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

/// Echo of a freshly inserted astronaut, without the joined planet
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAstronaut {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

impl CreatedAstronaut {
    pub fn new(id: i32, form: AstronautForm) -> Self {
        Self {
            id,
            firstname: form.firstname,
            lastname: form.lastname,
            origin_planet_id: form.origin_planet_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
