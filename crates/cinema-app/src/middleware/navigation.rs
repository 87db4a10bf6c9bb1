//! Navigation Middleware
//!
//! Sends the user to another route when the session changes:
//! - `NO_SESSION` goes to `/auth`
//! - `LOGIN_SUCCESS` / `REGISTER_SUCCESS` go to `/profile`

use std::sync::Weak;

use crate::actions::{Action, AuthAction, UserPageAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::router::Router;

pub const AUTH_PATH: &str = "/auth";
pub const PROFILE_PATH: &str = "/profile";

/// Holds the router weakly; the router owns the dispatcher this is
/// registered on
pub struct NavigationMiddleware {
    router: Weak<Router>,
}

impl NavigationMiddleware {
    pub fn new(router: Weak<Router>) -> Self {
        Self { router }
    }

    fn go(&self, path: &str) {
        match self.router.upgrade() {
            Some(router) => {
                if router.current_path() != path {
                    router.go(path, None);
                }
            }
            None => log::warn!("NavigationMiddleware: router gone, not navigating to {}", path),
        }
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&self, action: &Action, _dispatcher: &Dispatcher) -> anyhow::Result<()> {
        match action {
            Action::UserPage(UserPageAction::NoSession) => self.go(AUTH_PATH),
            Action::Auth(AuthAction::LoginSuccess(_) | AuthAction::RegisterSuccess(_)) => {
                self.go(PROFILE_PATH)
            }
            _ => {}
        }
        Ok(())
    }
}
