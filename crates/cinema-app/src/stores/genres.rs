use cinema_client::Genre;

use crate::actions::{Action, GenresAction, RenderAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type GenresStore = Store<GenresState>;

/// List of all genres (`/genres`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenresState {
    pub request: Option<RequestId>,
    pub genres: Loadable<Vec<Genre>>,
}

impl StoreState for GenresState {
    const NAME: &'static str = "genres";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::GenresPage) => {
                self.request = None;
                self.genres = Loadable::Loading;
            }
            Action::Genres(GenresAction::Load(request)) => {
                self.request = Some(*request);
                self.genres = Loadable::Loading;
            }
            Action::Genres(GenresAction::DataLoaded { request, genres }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.genres = Loadable::Loaded(genres.clone());
            }
            Action::Genres(GenresAction::DataError { request, error }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.genres = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}
