use crate::{
    AstronautApi, AstronautForList, AstronautListState, DeleteOutcome, ListStore, MessageCenter,
    PendingDelete, PresenterError, Selection, SelectionStore, View, render,
};

/// Owns the list and selection stores of the astronaut list screen
#[derive(Debug)]
pub struct AstronautListController<A, M> {
    api: A,
    messages: M,
    list: ListStore,
    selection: SelectionStore,
}

impl<A, M> AstronautListController<A, M>
where
    A: AstronautApi,
    M: MessageCenter,
{
    pub fn new(api: A, messages: M) -> Self {
        Self {
            api,
            messages,
            list: ListStore::default(),
            selection: SelectionStore::default(),
        }
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    pub fn select(&self, selection: Selection) {
        self.selection.set(selection);
    }

    pub async fn load(&self) {
        self.list.set(AstronautListState::loading());

        match self.api.list_astronauts().await {
            Ok(astronauts) => {
                tracing::debug!(count = astronauts.len(), "astronaut list loaded");
                self.list.set(AstronautListState::loaded(Some(astronauts)));
            }
            Err(err) => {
                tracing::warn!(error = %err, "astronaut list fetch failed");
                self.list.set(AstronautListState::failed(err.to_string()));
            }
        }
    }

    pub fn render(&self) -> Result<View, PresenterError> {
        render(&self.list.get(), &self.selection.get(), &self.messages)
    }

    pub fn edit<F: FnOnce(i32)>(&self, item: &AstronautForList, navigate: F) {
        navigate(item.id);
    }

    /// Removes the astronaut locally, then remotely; a remote failure puts it
    /// back and is reported in the outcome, not raised.
    pub async fn delete(&self, item: &AstronautForList) -> DeleteOutcome {
        let pending = PendingDelete::begin(&self.list, item);

        match self.api.delete_astronaut(pending.id()).await {
            Ok(()) => pending.confirm(&self.messages),
            Err(err) => {
                tracing::warn!(id = pending.id(), error = %err, "delete rolled back");
                pending.rollback(&self.list, &self.messages, err)
            }
        }
    }
}
