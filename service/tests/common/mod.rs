use dto::AstronautForm;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn form(firstname: &str, lastname: &str, origin_planet_id: i32) -> AstronautForm {
    AstronautForm {
        firstname: firstname.to_owned(),
        lastname: lastname.to_owned(),
        origin_planet_id,
    }
}
