//! Middleware - side effects kept out of the stores
//!
//! Middleware is registered on the dispatcher after every store, so by the
//! time it sees an action the stores have already reduced it. Requests run
//! on the tokio runtime; their outcome re-enters the system as a follow-up
//! action.

use cinema_client::CatalogClient;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;

pub mod catalog;
pub mod csat;
pub mod logging;
pub mod navigation;
pub mod popup_timer;
pub mod session;

pub use catalog::CatalogMiddleware;
pub use csat::CsatMiddleware;
pub use logging::LoggingMiddleware;
pub use navigation::NavigationMiddleware;
pub use popup_timer::PopupTimerMiddleware;
pub use session::SessionMiddleware;

/// Middleware trait - reacts to actions after the stores have seen them
///
/// `handle` runs synchronously inside the dispatch round and must not
/// block; anything slow goes through [`Effects::spawn`]. Actions dispatched
/// from here are queued behind the current one.
pub trait Middleware: Send + Sync {
    fn handle(&self, action: &Action, dispatcher: &Dispatcher) -> anyhow::Result<()>;
}

/// Register a middleware's handler with the dispatcher
pub fn register(dispatcher: &Dispatcher, middleware: Arc<dyn Middleware>) {
    dispatcher.register(move |action, dispatcher| middleware.handle(action, dispatcher));
}

/// Backend client plus the runtime requests run on
#[derive(Clone)]
pub struct Effects {
    client: Arc<dyn CatalogClient>,
    runtime: Handle,
}

impl Effects {
    pub fn new(client: Arc<dyn CatalogClient>, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Run `task` on the runtime and dispatch the actions it yields, in order
    pub fn spawn<F, Fut>(&self, dispatcher: &Dispatcher, task: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<dyn CatalogClient>) -> Fut,
        Fut: Future<Output = Vec<Action>> + Send + 'static,
    {
        let request = task(Arc::clone(&self.client));
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            for action in request.await {
                dispatcher.dispatch(action);
            }
        })
    }
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects").finish_non_exhaustive()
    }
}
