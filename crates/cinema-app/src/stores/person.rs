use cinema_client::{Person, PersonId};

use crate::actions::{Action, PersonAction, RenderAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type PersonStore = Store<PersonState>;

/// Person page (`/name/:id`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonState {
    pub person_id: Option<PersonId>,
    pub request: Option<RequestId>,
    pub person: Loadable<Person>,
}

impl StoreState for PersonState {
    const NAME: &'static str = "person";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::PersonPage(id)) => {
                self.person_id = Some(*id);
                self.request = None;
                self.person = Loadable::Loading;
            }
            Action::Person(PersonAction::Load { person_id, request }) => {
                self.person_id = Some(*person_id);
                self.request = Some(*request);
                self.person = Loadable::Loading;
            }
            Action::Person(PersonAction::DataLoaded { request, person }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.person = Loadable::Loaded(person.clone());
            }
            Action::Person(PersonAction::DataError { request, error }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.person = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}
