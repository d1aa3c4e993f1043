use sea_orm::DbErr;
use thiserror::Error;

/// Outcome of a service call that did not produce its value
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No astronaut row matched the requested id
    #[error("Astronaut not found")]
    NotFound,
    /// The store rejected or failed the statement
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
