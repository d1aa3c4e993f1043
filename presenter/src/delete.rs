use dto::Astronaut;

use crate::{AstronautForList, AstronautListState, ListStore, MessageCenter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: i32 },
    RolledBack { id: i32, reason: String },
}

/// First phase of an optimistic delete: the astronaut is already gone from
/// the list store, the remote call has not settled yet.
#[derive(Debug)]
#[must_use = "a pending delete must be confirmed or rolled back"]
pub struct PendingDelete {
    id: i32,
    firstname: String,
    lastname: String,
    original: Option<Vec<Astronaut>>,
}

impl PendingDelete {
    pub fn begin(list: &ListStore, target: &AstronautForList) -> Self {
        let original = list.get().astronaut_list;

        let captured = original
            .iter()
            .flatten()
            .find(|astronaut| astronaut.id == target.id);
        let (firstname, lastname) = match captured {
            Some(astronaut) => (astronaut.firstname.clone(), astronaut.lastname.clone()),
            None => (target.firstname.clone(), target.lastname.clone()),
        };

        let remaining = original.as_ref().map(|astronauts| {
            astronauts
                .iter()
                .filter(|astronaut| astronaut.id != target.id)
                .cloned()
                .collect()
        });
        list.set(AstronautListState::loaded(remaining));

        Self {
            id: target.id,
            firstname,
            lastname,
            original,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn confirm<M: MessageCenter + ?Sized>(self, messages: &M) -> DeleteOutcome {
        messages.push_info(format!(
            "Astronaut {} {} has been deleted from Eleven Labs space service",
            self.firstname, self.lastname
        ));
        DeleteOutcome::Deleted { id: self.id }
    }

    /// Puts the pre-delete list back.
    pub fn rollback<M: MessageCenter + ?Sized>(
        self,
        list: &ListStore,
        messages: &M,
        reason: impl ToString,
    ) -> DeleteOutcome {
        list.set(AstronautListState::loaded(self.original));
        messages.push_error(format!(
            "Cannot delete {} {} from the Eleven Labs space service",
            self.firstname, self.lastname
        ));
        DeleteOutcome::RolledBack {
            id: self.id,
            reason: reason.to_string(),
        }
    }
}
