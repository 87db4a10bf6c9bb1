//! Page host - mounts one page per render action
//!
//! Registered on the dispatcher after the stores, so a freshly created page
//! reads state that has already seen the render action.

use cinema_client::{GenreId, MovieId, PersonId};
use std::sync::Arc;

use crate::actions::{Action, RenderAction};
use crate::dispatcher::Dispatcher;
use crate::initial_store::{InitialStore, Page};

/// Which page a render action mounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Main,
    Auth,
    Movie(MovieId),
    Person(PersonId),
    Profile,
    Genre(GenreId),
    Genres,
    Search,
    Stats,
    Csat,
}

impl PageKind {
    /// Page mounted by `action`; fixtures (navbar, footer, survey prompt)
    /// and non-render actions mount nothing
    pub fn from_action(action: &Action) -> Option<Self> {
        let Action::Render(render) = action else {
            return None;
        };
        let kind = match render {
            RenderAction::MainPage => Self::Main,
            RenderAction::AuthRegPage => Self::Auth,
            RenderAction::MoviePage(id) => Self::Movie(*id),
            RenderAction::PersonPage(id) => Self::Person(*id),
            RenderAction::ProfilePage => Self::Profile,
            RenderAction::GenrePage(id) => Self::Genre(*id),
            RenderAction::GenresPage => Self::Genres,
            RenderAction::SearchPage(_) => Self::Search,
            RenderAction::StatsPage => Self::Stats,
            RenderAction::CsatPage => Self::Csat,
            RenderAction::Navbar | RenderAction::Footer | RenderAction::Csat => return None,
        };
        Some(kind)
    }
}

/// Builds pages for the view layer
pub trait PageFactory: Send + Sync {
    fn create(&self, kind: &PageKind) -> Box<dyn Page>;
}

pub struct PageHost {
    initial_store: Arc<InitialStore>,
    factory: Arc<dyn PageFactory>,
}

impl PageHost {
    pub fn new(initial_store: Arc<InitialStore>, factory: Arc<dyn PageFactory>) -> Self {
        Self {
            initial_store,
            factory,
        }
    }

    pub fn attach(self: &Arc<Self>, dispatcher: &Dispatcher) {
        let host = Arc::clone(self);
        dispatcher.register(move |action, _| {
            host.handle_action(action);
            Ok(())
        });
    }

    pub fn handle_action(&self, action: &Action) {
        if let Some(kind) = PageKind::from_action(action) {
            self.mount(&kind);
        }
    }

    /// Tear down the mounted page, then create and render `kind`
    pub fn mount(&self, kind: &PageKind) {
        log::debug!("PageHost: mounting {:?}", kind);
        self.initial_store.destroy_stored();
        let mut page = self.factory.create(kind);
        page.render();
        self.initial_store.store(page);
    }

    /// Destroy the mounted page (application teardown)
    pub fn unmount(&self) {
        self.initial_store.destroy_stored();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingPage {
        kind: PageKind,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Page for RecordingPage {
        fn render(&mut self) {
            self.log.lock().unwrap().push(format!("render {:?}", self.kind));
        }

        fn destroy(&mut self) {
            self.log.lock().unwrap().push(format!("destroy {:?}", self.kind));
        }
    }

    struct RecordingFactory {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl PageFactory for RecordingFactory {
        fn create(&self, kind: &PageKind) -> Box<dyn Page> {
            Box::new(RecordingPage {
                kind: kind.clone(),
                log: self.log.clone(),
            })
        }
    }

    #[test]
    fn test_render_actions_swap_pages() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let initial_store = Arc::new(InitialStore::new());
        let host = Arc::new(PageHost::new(
            initial_store.clone(),
            Arc::new(RecordingFactory { log: log.clone() }),
        ));
        let dispatcher = Dispatcher::new();
        host.attach(&dispatcher);

        dispatcher.dispatch(RenderAction::MainPage);
        dispatcher.dispatch(RenderAction::Navbar);
        dispatcher.dispatch(RenderAction::MoviePage(7));
        host.unmount();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "render Main",
                "destroy Main",
                "render Movie(7)",
                "destroy Movie(7)"
            ]
        );
        assert!(initial_store.is_empty());
    }

    #[test]
    fn test_fixtures_are_not_pages() {
        assert_eq!(PageKind::from_action(&RenderAction::Footer.into()), None);
        assert_eq!(PageKind::from_action(&RenderAction::Csat.into()), None);
        assert_eq!(
            PageKind::from_action(&RenderAction::SearchPage(Some("x".into())).into()),
            Some(PageKind::Search)
        );
    }
}
