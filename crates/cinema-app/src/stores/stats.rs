use cinema_client::Stats;

use crate::actions::{Action, RenderAction, StatsAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type StatsStore = Store<StatsState>;

/// Satisfaction survey statistics page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsState {
    /// The request whose result will be accepted
    pub request: Option<RequestId>,
    pub stats: Loadable<Stats>,
}

impl StoreState for StatsState {
    const NAME: &'static str = "stats";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::StatsPage) => {
                self.request = None;
                self.stats = Loadable::Loading;
            }
            Action::Stats(StatsAction::Load(request)) => {
                self.request = Some(*request);
                self.stats = Loadable::Loading;
            }
            Action::Stats(StatsAction::DataLoaded { request, stats }) => {
                if self.request != Some(*request) {
                    log::debug!("stats: dropping result of stale request {}", request);
                    return false;
                }
                self.stats = Loadable::Loaded(stats.clone());
            }
            Action::Stats(StatsAction::DataError { request, error }) => {
                if self.request != Some(*request) {
                    log::debug!("stats: dropping error of stale request {}", request);
                    return false;
                }
                self.stats = Loadable::Failed(error.clone());
            }
            _ => return false,
        }
        true
    }
}
