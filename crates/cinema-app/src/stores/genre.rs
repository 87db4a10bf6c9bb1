use cinema_client::{GenreId, GenrePage};

use crate::actions::{Action, GenreAction, RenderAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type GenreStore = Store<GenreState>;

/// Movies of a single genre (`/genre/:id`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreState {
    pub genre_id: Option<GenreId>,
    pub request: Option<RequestId>,
    pub page: Loadable<GenrePage>,
}

impl StoreState for GenreState {
    const NAME: &'static str = "genre";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::GenrePage(id)) => {
                self.genre_id = Some(*id);
                self.request = None;
                self.page = Loadable::Loading;
            }
            Action::Genre(GenreAction::Load { genre_id, request }) => {
                self.genre_id = Some(*genre_id);
                self.request = Some(*request);
                self.page = Loadable::Loading;
            }
            Action::Genre(GenreAction::DataLoaded { request, page }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.page = Loadable::Loaded(page.clone());
            }
            Action::Genre(GenreAction::DataError { request, error }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.page = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_genre_error_is_dropped() {
        let mut state = GenreState::default();
        let first = RequestId::next();
        let second = RequestId::next();
        state.reduce(&RenderAction::GenrePage(1).into());
        state.reduce(
            &GenreAction::Load {
                genre_id: 1,
                request: first,
            }
            .into(),
        );
        state.reduce(&RenderAction::GenrePage(2).into());
        state.reduce(
            &GenreAction::Load {
                genre_id: 2,
                request: second,
            }
            .into(),
        );

        let stale = GenreAction::DataError {
            request: first,
            error: "not_found".to_string(),
        };
        assert!(!state.reduce(&stale.into()));
        assert!(state.page.is_loading());
        assert_eq!(state.genre_id, Some(2));
    }
}
