use dto::{Astronaut, Planet};
use tokio::sync::watch;

/// Shared value with get / set / subscribe semantics
#[derive(Debug)]
pub struct Store<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// The currently chosen planet, or nowhere at all
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoWhere,
    Planet(Planet),
}

impl Selection {
    pub fn planet(&self) -> Option<&Planet> {
        match self {
            Self::NoWhere => None,
            Self::Planet(planet) => Some(planet),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AstronautListState {
    pub is_loading: bool,
    /// `None` until the first fetch lands
    pub astronaut_list: Option<Vec<Astronaut>>,
    pub error: Option<String>,
}

impl AstronautListState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn loaded(astronaut_list: Option<Vec<Astronaut>>) -> Self {
        Self {
            is_loading: false,
            astronaut_list,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            is_loading: false,
            astronaut_list: None,
            error: Some(error),
        }
    }
}

pub type ListStore = Store<AstronautListState>;

pub type SelectionStore = Store<Selection>;
