//! Application bootstrap
//!
//! Builds the dispatcher, stores, page host, router and middleware, and
//! registers them in the order the data flow relies on: logging first,
//! then every store, then the page host (pages read reduced state), then
//! the middleware that starts requests.

use cinema_client::CatalogClient;
use cinema_config::{AppConfig, Session};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::creators;
use crate::dispatcher::Dispatcher;
use crate::initial_store::InitialStore;
use crate::middleware::{
    self, CatalogMiddleware, CsatMiddleware, Effects, LoggingMiddleware, NavigationMiddleware,
    PopupTimerMiddleware, SessionMiddleware,
};
use crate::page_host::{PageFactory, PageHost};
use crate::router::{NavigatorBackend, Router};
use crate::stores::{
    AuthStore, CsatStore, GenreStore, GenresStore, MainPageStore, MoviePageStore, NavbarStore,
    NotificationStore, PersonStore, PopupStore, SearchStore, StatsStore, UserPageStore,
};

/// One instance of every store
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub auth: Arc<AuthStore>,
    pub navbar: Arc<NavbarStore>,
    pub main_page: Arc<MainPageStore>,
    pub movie_page: Arc<MoviePageStore>,
    pub person: Arc<PersonStore>,
    pub genres: Arc<GenresStore>,
    pub genre: Arc<GenreStore>,
    pub search: Arc<SearchStore>,
    pub stats: Arc<StatsStore>,
    pub user_page: Arc<UserPageStore>,
    pub csat: Arc<CsatStore>,
    pub popup: Arc<PopupStore>,
    pub notification: Arc<NotificationStore>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&self, dispatcher: &Dispatcher) {
        self.auth.attach(dispatcher);
        self.navbar.attach(dispatcher);
        self.main_page.attach(dispatcher);
        self.movie_page.attach(dispatcher);
        self.person.attach(dispatcher);
        self.genres.attach(dispatcher);
        self.genre.attach(dispatcher);
        self.search.attach(dispatcher);
        self.stats.attach(dispatcher);
        self.user_page.attach(dispatcher);
        self.csat.attach(dispatcher);
        self.popup.attach(dispatcher);
        self.notification.attach(dispatcher);
    }
}

/// Everything the core needs from its host
pub struct AppDeps {
    pub client: Arc<dyn CatalogClient>,
    pub runtime: Handle,
    pub navigator: Arc<dyn NavigatorBackend>,
    pub page_factory: Arc<dyn PageFactory>,
    /// Stores shared with the page factory
    pub stores: Stores,
    pub session: Session,
    pub config: AppConfig,
}

pub struct App {
    dispatcher: Dispatcher,
    stores: Stores,
    router: Arc<Router>,
    page_host: Arc<PageHost>,
    session: Arc<Mutex<Session>>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let AppDeps {
            client,
            runtime,
            navigator,
            page_factory,
            stores,
            session,
            config,
        } = deps;

        let dispatcher = Dispatcher::new();
        let popup_duration = Duration::from_millis(config.popup_duration_ms);
        let session = Arc::new(Mutex::new(session));

        middleware::register(&dispatcher, Arc::new(LoggingMiddleware::new()));
        stores.attach(&dispatcher);

        let page_host = Arc::new(PageHost::new(
            Arc::new(InitialStore::new()),
            page_factory,
        ));
        page_host.attach(&dispatcher);

        let router = Arc::new(Router::new(dispatcher.clone(), navigator));
        let effects = Effects::new(client, runtime.clone());
        middleware::register(
            &dispatcher,
            Arc::new(SessionMiddleware::new(
                effects.clone(),
                Arc::clone(&session),
                popup_duration,
            )),
        );
        middleware::register(
            &dispatcher,
            Arc::new(CatalogMiddleware::new(effects.clone(), popup_duration)),
        );
        middleware::register(
            &dispatcher,
            Arc::new(CsatMiddleware::new(effects, popup_duration)),
        );
        middleware::register(&dispatcher, Arc::new(PopupTimerMiddleware::new(runtime)));
        middleware::register(
            &dispatcher,
            Arc::new(NavigationMiddleware::new(Arc::downgrade(&router))),
        );

        log::debug!(
            "App: {} dispatcher callbacks registered",
            dispatcher.callback_count()
        );

        Self {
            dispatcher,
            stores,
            router,
            page_host,
            session,
        }
    }

    /// Render the fixtures, then the page for the current location
    pub fn start(&self) {
        if let Some(username) = self.cached_username() {
            log::info!("App: last session belonged to {}", username);
        }
        creators::render_navbar(&self.dispatcher);
        creators::render_footer(&self.dispatcher);
        self.router.start_routing();
    }

    /// Tear down the mounted page
    pub fn shutdown(&self) {
        log::info!("App: shutting down");
        self.page_host.unmount();
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Username remembered from the previous session, if any
    pub fn cached_username(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .username()
            .map(str::to_string)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("dispatcher", &self.dispatcher)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}
