use cinema_client::Collection;

use crate::actions::{Action, MainPageAction, RenderAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type MainPageStore = Store<MainPageState>;

/// Collections shown on the landing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainPageState {
    pub request: Option<RequestId>,
    pub collections: Loadable<Vec<Collection>>,
}

impl StoreState for MainPageState {
    const NAME: &'static str = "main_page";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::MainPage) => {
                self.request = None;
                self.collections = Loadable::Loading;
            }
            Action::MainPage(MainPageAction::Load(request)) => {
                self.request = Some(*request);
                self.collections = Loadable::Loading;
            }
            Action::MainPage(MainPageAction::DataLoaded {
                request,
                collections,
            }) => {
                if self.request != Some(*request) {
                    log::debug!("main_page: dropping stale collections {}", request);
                    return false;
                }
                self.collections = Loadable::Loaded(collections.clone());
            }
            Action::MainPage(MainPageAction::DataError { request, error }) => {
                if self.request != Some(*request) {
                    return false;
                }
                self.collections = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}
