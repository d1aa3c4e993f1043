use dto::Astronaut;
use serde::{Deserialize, Serialize};

use crate::{AstronautListState, MessageCenter, PresenterError, Selection};

pub const OFFLINE_MESSAGE: &str = "Eleven Labs space services are not online ...";

/// Row shown in the astronaut list
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronautForList {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub planet_of_origin: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Loader {
        name: &'static str,
        label: &'static str,
    },
    List {
        label: &'static str,
        items: Vec<AstronautForList>,
        empty_message: &'static str,
    },
}

/// Astronauts born on the selected planet, ready for display.
pub fn map_astronaut_list(
    selection: &Selection,
    astronaut_list: Option<&[Astronaut]>,
) -> Vec<AstronautForList> {
    let (Some(astronauts), Some(planet)) = (astronaut_list, selection.planet()) else {
        return Vec::new();
    };

    astronauts
        .iter()
        .filter(|astronaut| astronaut.origin_planet.id == planet.id)
        .map(|astronaut| AstronautForList {
            id: astronaut.id,
            firstname: astronaut.firstname.clone(),
            lastname: astronaut.lastname.clone(),
            planet_of_origin: astronaut.origin_planet.name.clone(),
        })
        .collect()
}

/// A list state carrying an error is not rendered: the error is announced and
/// handed back to the caller.
pub fn render<M: MessageCenter + ?Sized>(
    state: &AstronautListState,
    selection: &Selection,
    messages: &M,
) -> Result<View, PresenterError> {
    if let Some(error) = &state.error {
        messages.push_error(OFFLINE_MESSAGE.to_owned());
        return Err(PresenterError::Offline(error.clone()));
    }

    let items = map_astronaut_list(selection, state.astronaut_list.as_deref());

    if state.is_loading || selection.planet().is_none() || items.is_empty() {
        return Ok(View::Loader {
            name: "astronautlist-loader",
            label: "astronaut in the spaceship",
        });
    }

    Ok(View::List {
        label: "astronauts in the spaceship",
        items,
        empty_message: "Any astronaut in your spaceship",
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use dto::{Astronaut, Image, Planet};

    pub fn planet(id: i32, name: &str) -> Planet {
        Planet {
            id,
            name: name.to_owned(),
            is_habitable: true,
            description: format!("{name} description"),
            image: Image {
                path: format!("/images/planets/{id}.png"),
                name: name.to_owned(),
            },
        }
    }

    pub fn astronaut(id: i32, firstname: &str, lastname: &str, origin: &Planet) -> Astronaut {
        Astronaut {
            id,
            firstname: firstname.to_owned(),
            lastname: lastname.to_owned(),
            origin_planet: origin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{astronaut, planet};
    use super::*;
    use crate::{Level, MessageLog};
    use pretty_assertions::assert_eq;

    fn crew() -> Vec<Astronaut> {
        let earth = planet(1, "Earth");
        let mars = planet(2, "Mars");
        vec![
            astronaut(1, "Ellen", "Ripley", &earth),
            astronaut(2, "Mark", "Watney", &mars),
            astronaut(3, "Dallas", "Arthur", &earth),
        ]
    }

    #[test]
    fn keeps_astronauts_of_the_selected_planet() {
        let crew = crew();
        let selection = Selection::Planet(planet(1, "Earth"));

        assert_eq!(
            map_astronaut_list(&selection, Some(crew.as_slice())),
            vec![
                AstronautForList {
                    id: 1,
                    firstname: "Ellen".to_owned(),
                    lastname: "Ripley".to_owned(),
                    planet_of_origin: "Earth".to_owned(),
                },
                AstronautForList {
                    id: 3,
                    firstname: "Dallas".to_owned(),
                    lastname: "Arthur".to_owned(),
                    planet_of_origin: "Earth".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn nowhere_or_missing_list_yields_nothing() {
        let crew = crew();

        assert!(map_astronaut_list(&Selection::NoWhere, Some(crew.as_slice())).is_empty());
        assert!(map_astronaut_list(&Selection::Planet(planet(1, "Earth")), None).is_empty());
        assert!(map_astronaut_list(&Selection::Planet(planet(9, "Neptune")), Some(crew.as_slice())).is_empty());
    }

    #[test]
    fn loader_while_loading_nowhere_or_empty() {
        let messages = MessageLog::new();
        let earth = Selection::Planet(planet(1, "Earth"));
        let is_loader = |view: Result<View, PresenterError>| matches!(view, Ok(View::Loader { .. }));

        let loading = AstronautListState {
            is_loading: true,
            astronaut_list: Some(crew()),
            error: None,
        };
        assert!(is_loader(render(&loading, &earth, &messages)));

        let loaded = AstronautListState::loaded(Some(crew()));
        assert!(is_loader(render(&loaded, &Selection::NoWhere, &messages)));
        assert!(is_loader(render(
            &loaded,
            &Selection::Planet(planet(9, "Neptune")),
            &messages
        )));

        assert!(messages.drain().is_empty());
    }

    #[test]
    fn populated_list_when_matches_exist() {
        let messages = MessageLog::new();
        let state = AstronautListState::loaded(Some(crew()));

        let items = match render(&state, &Selection::Planet(planet(2, "Mars")), &messages) {
            Ok(View::List { items, .. }) => items,
            other => panic!("expected a list, got {other:?}"),
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].planet_of_origin, "Mars");
    }

    #[test]
    fn error_state_is_announced_and_raised() {
        let messages = MessageLog::new();
        let state = AstronautListState::failed("connection refused".to_owned());

        let err = render(&state, &Selection::Planet(planet(1, "Earth")), &messages).unwrap_err();

        assert_eq!(err, PresenterError::Offline("connection refused".to_owned()));
        let messages = messages.drain();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, Level::Error);
        assert_eq!(messages[0].text, OFFLINE_MESSAGE);
    }
}
