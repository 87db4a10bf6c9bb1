//! Router - URL paths to render actions
//!
//! Translates `go(path)` calls and history navigation into render actions
//! and keeps a scroll offset per URL, so returning to the page just left
//! lands where the user was.
//!
//! The browser side (location, history, scrolling) sits behind
//! [`NavigatorBackend`]; [`MemoryNavigator`] is the headless implementation.

use reqwest::Url;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::actions::RenderAction;
use crate::dispatcher::Dispatcher;

/// Route prefix and optional trailing id of a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMethod {
    pub method: String,
    pub id: Option<String>,
}

impl UrlMethod {
    fn root() -> Self {
        Self {
            method: "/".to_string(),
            id: None,
        }
    }
}

/// Split a path (or absolute URL) into route prefix and id
///
/// `/movie/42` gives `("/movie", "42")`, `/auth` gives `("/auth", None)`,
/// an empty path gives `("/", None)`. Query and fragment are ignored.
/// Input that does not parse as a URL falls back to the root.
pub fn get_url_method_and_id(path: &str) -> UrlMethod {
    let Ok(base) = Url::parse("http://localhost/") else {
        return UrlMethod::root();
    };
    let Ok(url) = base.join(path) else {
        log::debug!("Router: unparseable path '{}'", path);
        return UrlMethod::root();
    };

    let mut segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 => UrlMethod::root(),
        1 => UrlMethod {
            method: format!("/{}", segments[0]),
            id: None,
        },
        _ => {
            let id = segments.pop().map(str::to_string);
            UrlMethod {
                method: format!("/{}", segments.join("/")),
                id,
            }
        }
    }
}

/// State pushed with every history entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub id: Option<String>,
    /// Route payload (the search query for `/search`)
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub state: Option<HistoryState>,
}

/// Input of [`Router::handler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteArgs {
    pub method: String,
    pub id: Option<String>,
    pub data: Option<String>,
}

/// Location, history and scroll position of the host environment
pub trait NavigatorBackend: Send + Sync {
    fn current_path(&self) -> String;

    /// Add a history entry for `path` and make it current
    fn push_state(&self, path: &str, state: HistoryState);

    /// Step back in history, returning the entry that became current
    fn back(&self) -> Option<HistoryEntry>;

    fn scroll_offset(&self) -> u32;

    fn scroll_to(&self, offset: u32);
}

/// Resolve route arguments to the render action they trigger
///
/// Routes match on the exact prefix. Id routes need a numeric id, the
/// others must not have one. `None` means the path is not routable.
pub fn resolve(args: &RouteArgs) -> Option<RenderAction> {
    let numeric_id = || args.id.as_deref().and_then(|id| id.parse::<u64>().ok());
    let no_id = args.id.is_none();

    match args.method.as_str() {
        "/" if no_id => Some(RenderAction::MainPage),
        "/auth" if no_id => Some(RenderAction::AuthRegPage),
        "/profile" if no_id => Some(RenderAction::ProfilePage),
        "/csat" if no_id => Some(RenderAction::CsatPage),
        "/genres" if no_id => Some(RenderAction::GenresPage),
        "/search" if no_id => Some(RenderAction::SearchPage(args.data.clone())),
        "/stats" if no_id => Some(RenderAction::StatsPage),
        "/movie" => numeric_id().map(RenderAction::MoviePage),
        "/name" => numeric_id().map(RenderAction::PersonPage),
        "/genre" => numeric_id().map(RenderAction::GenrePage),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct ScrollMemory {
    offsets: HashMap<String, u32>,
    /// URL most recently navigated away from
    last_url: Option<String>,
    /// URL of the page currently rendered
    shown: Option<String>,
}

pub struct Router {
    dispatcher: Dispatcher,
    navigator: Arc<dyn NavigatorBackend>,
    scroll: Mutex<ScrollMemory>,
}

impl Router {
    pub fn new(dispatcher: Dispatcher, navigator: Arc<dyn NavigatorBackend>) -> Self {
        Self {
            dispatcher,
            navigator,
            scroll: Mutex::new(ScrollMemory::default()),
        }
    }

    /// Navigate to `path`
    ///
    /// Unroutable paths end up on `/` instead.
    pub fn go(&self, path: &str, data: Option<String>) {
        let leaving = self.navigator.current_path();
        let offset = self.navigator.scroll_offset();
        self.scroll().offsets.insert(leaving.clone(), offset);

        let UrlMethod { method, id } = get_url_method_and_id(path);
        let args = RouteArgs {
            method,
            id: id.clone(),
            data: data.clone(),
        };
        if !self.handler(&args) {
            return;
        }

        self.navigator.push_state(path, HistoryState { id, data });

        let restore = {
            let mut scroll = self.scroll();
            let restore = if scroll.last_url.as_deref() == Some(path) {
                scroll.offsets.get(path).copied().unwrap_or(0)
            } else {
                0
            };
            scroll.last_url = Some(leaving);
            scroll.shown = Some(path.to_string());
            restore
        };
        self.navigator.scroll_to(restore);
    }

    /// Dispatch the render action for `args`
    ///
    /// Returns `false` when the route is unknown, after redirecting to `/`.
    pub fn handler(&self, args: &RouteArgs) -> bool {
        match resolve(args) {
            Some(action) => {
                let tag: &'static str = (&action).into();
                log::debug!("Router: {} -> {}", args.method, tag);
                self.dispatcher.dispatch(action);
                true
            }
            None => {
                log::info!(
                    "Router: no route for {} (id {:?}), redirecting to /",
                    args.method,
                    args.id
                );
                self.go("/", None);
                false
            }
        }
    }

    /// Render whatever the navigator currently points at
    pub fn start_routing(&self) {
        let path = self.navigator.current_path();
        log::info!("Router: starting at {}", path);
        let UrlMethod { method, id } = get_url_method_and_id(&path);
        let routed = self.handler(&RouteArgs {
            method,
            id,
            data: None,
        });
        if routed {
            self.scroll().shown = Some(path);
        }
    }

    /// Replay a history entry the user navigated to
    ///
    /// The id stored with the entry wins over the one in the path. The
    /// offset of the page being left is saved first; the entry's saved
    /// offset is restored once the render action has been handled.
    pub fn on_pop_state(&self, path: &str, state: Option<HistoryState>) {
        let offset = self.navigator.scroll_offset();
        {
            let mut scroll = self.scroll();
            if let Some(leaving) = scroll.shown.take() {
                scroll.offsets.insert(leaving.clone(), offset);
                scroll.last_url = Some(leaving);
            }
        }

        let UrlMethod { method, id } = get_url_method_and_id(path);
        let state = state.unwrap_or_default();
        let routed = self.handler(&RouteArgs {
            method,
            id: state.id.or(id),
            data: state.data,
        });
        if routed {
            let offset = {
                let mut scroll = self.scroll();
                scroll.shown = Some(path.to_string());
                scroll.offsets.get(path).copied().unwrap_or(0)
            };
            self.navigator.scroll_to(offset);
        }
    }

    /// Go back one history entry, if there is one
    pub fn back(&self) -> bool {
        match self.navigator.back() {
            Some(entry) => {
                self.on_pop_state(&entry.path, entry.state);
                true
            }
            None => false,
        }
    }

    pub fn current_path(&self) -> String {
        self.navigator.current_path()
    }

    fn scroll(&self) -> MutexGuard<'_, ScrollMemory> {
        self.scroll
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("current_path", &self.navigator.current_path())
            .finish()
    }
}

#[derive(Debug)]
struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    offset: u32,
}

/// In-memory history stack with a single scroll position
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<MemoryHistory>,
}

impl MemoryNavigator {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(MemoryHistory {
                entries: vec![HistoryEntry {
                    path: start_path.into(),
                    state: None,
                }],
                cursor: 0,
                offset: 0,
            }),
        }
    }

    /// Number of entries in the history stack
    pub fn len(&self) -> usize {
        self.history().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history().entries.is_empty()
    }

    fn history(&self) -> MutexGuard<'_, MemoryHistory> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NavigatorBackend for MemoryNavigator {
    fn current_path(&self) -> String {
        let history = self.history();
        history.entries[history.cursor].path.clone()
    }

    fn push_state(&self, path: &str, state: HistoryState) {
        let mut history = self.history();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(HistoryEntry {
            path: path.to_string(),
            state: Some(state),
        });
        history.cursor = keep;
    }

    fn back(&self) -> Option<HistoryEntry> {
        let mut history = self.history();
        if history.cursor == 0 {
            return None;
        }
        history.cursor -= 1;
        Some(history.entries[history.cursor].clone())
    }

    fn scroll_offset(&self) -> u32 {
        self.history().offset
    }

    fn scroll_to(&self, offset: u32) {
        self.history().offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use pretty_assertions::assert_eq;

    fn method(method: &str, id: Option<&str>) -> UrlMethod {
        UrlMethod {
            method: method.to_string(),
            id: id.map(str::to_string),
        }
    }

    fn setup(start: &str) -> (Router, Arc<MemoryNavigator>, Arc<Mutex<Vec<Action>>>) {
        let dispatcher = Dispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        dispatcher.register(move |action: &Action, _: &Dispatcher| {
            sink.lock().unwrap().push(action.clone());
            Ok(())
        });
        let navigator = Arc::new(MemoryNavigator::new(start));
        let router = Router::new(dispatcher, navigator.clone());
        (router, navigator, seen)
    }

    #[test]
    fn test_get_url_method_and_id() {
        assert_eq!(get_url_method_and_id("/movie/42"), method("/movie", Some("42")));
        assert_eq!(get_url_method_and_id("/auth"), method("/auth", None));
        assert_eq!(get_url_method_and_id("/"), method("/", None));
        assert_eq!(get_url_method_and_id(""), method("/", None));
        assert_eq!(get_url_method_and_id("/name//7/"), method("/name", Some("7")));
        assert_eq!(
            get_url_method_and_id("/a/b/c?page=2#top"),
            method("/a/b", Some("c"))
        );
        assert_eq!(
            get_url_method_and_id("https://cinema.example/genre/3"),
            method("/genre", Some("3"))
        );
    }

    #[test]
    fn test_malformed_url_falls_back_to_root() {
        assert_eq!(get_url_method_and_id("http://[broken"), method("/", None));
    }

    #[test]
    fn test_resolve_routes() {
        let args = |m: &str, id: Option<&str>| RouteArgs {
            method: m.to_string(),
            id: id.map(str::to_string),
            data: None,
        };
        assert_eq!(resolve(&args("/", None)), Some(RenderAction::MainPage));
        assert_eq!(
            resolve(&args("/movie", Some("42"))),
            Some(RenderAction::MoviePage(42))
        );
        assert_eq!(
            resolve(&args("/name", Some("9"))),
            Some(RenderAction::PersonPage(9))
        );
        assert_eq!(resolve(&args("/movie", None)), None);
        assert_eq!(resolve(&args("/movie", Some("abc"))), None);
        assert_eq!(resolve(&args("/profile", Some("1"))), None);
        assert_eq!(resolve(&args("/nowhere", None)), None);
    }

    #[test]
    fn test_go_dispatches_and_pushes_history() {
        let (router, navigator, seen) = setup("/");
        router.go("/movie/42", None);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::Render(RenderAction::MoviePage(42))]
        );
        assert_eq!(navigator.current_path(), "/movie/42");
        assert_eq!(navigator.len(), 2);
    }

    #[test]
    fn test_unknown_path_redirects_to_root() {
        let (router, navigator, seen) = setup("/stats");
        router.go("/movie/not-a-number", None);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::Render(RenderAction::MainPage)]
        );
        assert_eq!(navigator.current_path(), "/");
    }

    #[test]
    fn test_search_data_reaches_render_action() {
        let (router, _, seen) = setup("/");
        router.go("/search", Some("alien".to_string()));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::Render(RenderAction::SearchPage(Some(
                "alien".to_string()
            )))]
        );
    }

    #[test]
    fn test_returning_to_last_url_restores_scroll() {
        let (router, navigator, _) = setup("/");
        navigator.scroll_to(300);

        router.go("/movie/1", None);
        assert_eq!(navigator.scroll_offset(), 0);

        navigator.scroll_to(50);
        router.go("/", None);
        assert_eq!(navigator.scroll_offset(), 300);

        // "/movie/1" was just left and keeps its offset
        router.go("/movie/1", None);
        assert_eq!(navigator.scroll_offset(), 50);

        router.go("/stats", None);
        assert_eq!(navigator.scroll_offset(), 0);
    }

    #[test]
    fn test_back_replays_history_state() {
        let (router, navigator, seen) = setup("/");
        router.go("/genre/3", None);
        navigator.scroll_to(120);
        router.go("/genres", None);

        assert!(router.back());

        assert_eq!(navigator.current_path(), "/genre/3");
        assert_eq!(navigator.scroll_offset(), 120);
        assert_eq!(
            seen.lock().unwrap().last(),
            Some(&Action::Render(RenderAction::GenrePage(3)))
        );
    }

    #[test]
    fn test_back_keeps_offset_of_page_left() {
        let (router, navigator, _) = setup("/");
        router.go("/movie/1", None);
        navigator.scroll_to(40);
        router.go("/stats", None);
        navigator.scroll_to(75);

        assert!(router.back());
        assert_eq!(navigator.scroll_offset(), 40);

        // "/stats" was left through history and still has its offset
        router.go("/stats", None);
        assert_eq!(navigator.scroll_offset(), 75);
    }

    #[test]
    fn test_start_routing_renders_current_path() {
        let (router, navigator, seen) = setup("/name/5");
        router.start_routing();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::Render(RenderAction::PersonPage(5))]
        );
        assert_eq!(navigator.len(), 1);
    }
}
