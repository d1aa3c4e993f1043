use axum::http::StatusCode;

use crate::config::StatusPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    ListAstronauts,
    GetAstronaut,
    CreateAstronaut,
    UpdateAstronaut,
    DeleteAstronaut,
    ListPlanets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Failure,
    /// The request could not be decoded into the operation's input
    Rejected,
}

impl StatusPolicy {
    pub fn status(self, operation: Operation, outcome: Outcome) -> StatusCode {
        match self {
            Self::Conventional => match outcome {
                Outcome::Success => StatusCode::OK,
                Outcome::NotFound => StatusCode::NOT_FOUND,
                Outcome::Failure => StatusCode::INTERNAL_SERVER_ERROR,
                Outcome::Rejected => StatusCode::BAD_REQUEST,
            },
            Self::Legacy => StatusCode::from_u16(legacy_code(operation, outcome))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

fn legacy_code(operation: Operation, outcome: Outcome) -> u16 {
    use Operation::*;
    use Outcome::*;

    match (operation, outcome) {
        (GetAstronaut, Success) => 200,
        (GetAstronaut, NotFound) => 504,
        (GetAstronaut, Failure | Rejected) => 400,
        (UpdateAstronaut, Success) => 300,
        (UpdateAstronaut, NotFound) => 454,
        (UpdateAstronaut, Failure | Rejected) => 503,
        (DeleteAstronaut, Success) => 403,
        (DeleteAstronaut, NotFound) => 404,
        (DeleteAstronaut, Failure | Rejected) => 405,
        (ListAstronauts | CreateAstronaut | ListPlanets, Success) => 200,
        (ListAstronauts | CreateAstronaut | ListPlanets, NotFound | Failure | Rejected) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::{Operation::*, Outcome::*, StatusCode, StatusPolicy};

    #[test]
    fn conventional_ignores_the_operation() {
        for operation in [
            ListAstronauts,
            GetAstronaut,
            CreateAstronaut,
            UpdateAstronaut,
            DeleteAstronaut,
            ListPlanets,
        ] {
            let policy = StatusPolicy::Conventional;
            assert_eq!(policy.status(operation, Success), StatusCode::OK);
            assert_eq!(policy.status(operation, NotFound), StatusCode::NOT_FOUND);
            assert_eq!(
                policy.status(operation, Failure),
                StatusCode::INTERNAL_SERVER_ERROR
            );
            assert_eq!(policy.status(operation, Rejected), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn legacy_keeps_historical_codes() {
        let status = |operation, outcome| StatusPolicy::Legacy.status(operation, outcome).as_u16();

        assert_eq!(status(ListAstronauts, Success), 200);
        assert_eq!(status(ListAstronauts, Failure), 500);
        assert_eq!(status(GetAstronaut, NotFound), 504);
        assert_eq!(status(GetAstronaut, Failure), 400);
        assert_eq!(status(CreateAstronaut, Success), 200);
        assert_eq!(status(CreateAstronaut, Failure), 500);
        assert_eq!(status(UpdateAstronaut, Success), 300);
        assert_eq!(status(UpdateAstronaut, NotFound), 454);
        assert_eq!(status(UpdateAstronaut, Failure), 503);
        assert_eq!(status(DeleteAstronaut, Success), 403);
        assert_eq!(status(DeleteAstronaut, NotFound), 404);
        assert_eq!(status(DeleteAstronaut, Failure), 405);
    }

    #[test]
    fn legacy_rejections_reuse_the_failure_code() {
        let status = |operation, outcome| StatusPolicy::Legacy.status(operation, outcome).as_u16();

        assert_eq!(status(GetAstronaut, Rejected), 400);
        assert_eq!(status(CreateAstronaut, Rejected), 500);
        assert_eq!(status(UpdateAstronaut, Rejected), 503);
        assert_eq!(status(DeleteAstronaut, Rejected), 405);
    }
}
