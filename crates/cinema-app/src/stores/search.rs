//! Search store
//!
//! Only the latest submitted query's request is accepted; results for a
//! query the user has already replaced (or resubmitted) are dropped.

use cinema_client::SearchResults;

use crate::actions::{Action, RenderAction, SearchAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type SearchStore = Store<SearchState>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: Option<String>,
    pub request: Option<RequestId>,
    pub results: Loadable<SearchResults>,
}

impl SearchState {
    fn is_current(&self, request: RequestId) -> bool {
        self.request == Some(request)
    }
}

impl StoreState for SearchState {
    const NAME: &'static str = "search";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            // With a query the page is followed by SEARCH_SUBMIT
            Action::Render(RenderAction::SearchPage(None)) => *self = Self::default(),
            Action::Search(SearchAction::Submit { query, request }) => {
                self.query = Some(query.clone());
                self.request = Some(*request);
                self.results = Loadable::Loading;
            }
            Action::Search(SearchAction::ResultsLoaded { request, results }) => {
                if !self.is_current(*request) {
                    log::debug!("search: dropping results of stale request {}", request);
                    return false;
                }
                self.results = Loadable::Loaded(results.clone());
            }
            Action::Search(SearchAction::Error { request, error }) => {
                if !self.is_current(*request) {
                    return false;
                }
                self.results = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}
