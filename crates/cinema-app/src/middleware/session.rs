//! Session Middleware
//!
//! Everything that talks to the backend about who the user is:
//! - login / registration (after the same validation the auth store runs)
//! - session check when the navbar renders
//! - profile load, update and avatar upload
//! - logout
//!
//! The username of the last successful session is cached in [`Session`]
//! so the next start can greet the user before the backend answers.

use cinema_client::{ApiError, Credentials, Registration, User};
use cinema_config::Session;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::actions::{Action, AuthAction, Popup, PopupAction, RenderAction, UserPageAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::{Effects, Middleware};
use crate::stores::auth::{AuthError, validate_login, validate_registration};

pub struct SessionMiddleware {
    effects: Effects,
    session: Arc<Mutex<Session>>,
    popup_duration: Duration,
}

impl SessionMiddleware {
    pub fn new(effects: Effects, session: Arc<Mutex<Session>>, popup_duration: Duration) -> Self {
        Self {
            effects,
            session,
            popup_duration,
        }
    }
}

fn remember(session: &Mutex<Session>, username: &str) {
    let mut session = session.lock().unwrap_or_else(|p| p.into_inner());
    if session.username() == Some(username) {
        return;
    }
    session.set_username(username);
    if let Err(e) = session.save() {
        log::warn!("Failed to save session: {:#}", e);
    }
}

fn forget(session: &Mutex<Session>) {
    let mut session = session.lock().unwrap_or_else(|p| p.into_inner());
    if session.username().is_none() {
        return;
    }
    session.clear_username();
    if let Err(e) = session.save() {
        log::warn!("Failed to save session: {:#}", e);
    }
}

/// Profile request outcome; an expired session sends the user to log in
fn profile_result(result: Result<User, ApiError>) -> Action {
    match result {
        Ok(user) => UserPageAction::UpdateUserPage(user).into(),
        Err(e) if e.is_unauthorized() => UserPageAction::NoSession.into(),
        Err(e) => {
            log::error!("Profile request failed: {}", e);
            UserPageAction::UserDataError(e.error_code()).into()
        }
    }
}

/// Outcome of a profile change, with a confirmation popup on success
fn profile_saved(result: Result<User, ApiError>, popup_duration: Duration) -> Vec<Action> {
    let saved = result.is_ok();
    let mut actions = vec![profile_result(result)];
    if saved {
        actions.push(PopupAction::Show(Popup::success("Profile saved", popup_duration)).into());
    }
    actions
}

impl SessionMiddleware {
    fn login(&self, dispatcher: &Dispatcher, username: &str, password: &str) {
        if let Err(e) = validate_login(username, password) {
            log::debug!("SessionMiddleware: login form invalid ({})", e.key());
            return;
        }
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let session = Arc::clone(&self.session);
        self.effects.spawn(dispatcher, move |client| async move {
            match client.login(&credentials).await {
                Ok(user) => {
                    log::info!("Logged in as {}", user.username);
                    remember(&session, &user.username);
                    vec![AuthAction::LoginSuccess(user).into()]
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    vec![AuthAction::LoginError(AuthError::Server(e.error_code())).into()]
                }
            }
        });
    }

    fn register(&self, dispatcher: &Dispatcher, registration: Registration) {
        if let Err(e) = validate_registration(
            &registration.username,
            &registration.password,
            &registration.repeated_password,
        ) {
            log::debug!("SessionMiddleware: registration form invalid ({})", e.key());
            return;
        }
        let session = Arc::clone(&self.session);
        self.effects.spawn(dispatcher, move |client| async move {
            match client.register(&registration).await {
                Ok(user) => {
                    log::info!("Registered {}", user.username);
                    remember(&session, &user.username);
                    vec![AuthAction::RegisterSuccess(user).into()]
                }
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    vec![AuthAction::RegisterError(AuthError::Server(e.error_code())).into()]
                }
            }
        });
    }

    fn check_session(&self, dispatcher: &Dispatcher) {
        let session = Arc::clone(&self.session);
        self.effects.spawn(dispatcher, move |client| async move {
            match client.check_session().await {
                Ok(info) => {
                    remember(&session, &info.username);
                    vec![AuthAction::SessionRestored(info.username).into()]
                }
                Err(e) if e.is_unauthorized() => {
                    log::debug!("No active session");
                    forget(&session);
                    vec![]
                }
                Err(e) => {
                    log::warn!("Session check failed: {}", e);
                    vec![]
                }
            }
        });
    }

    fn get_user(&self, dispatcher: &Dispatcher) {
        self.effects.spawn(dispatcher, move |client| async move {
            let result = match client.check_session().await {
                Ok(info) => client.fetch_user(&info.username).await,
                Err(e) => Err(e),
            };
            vec![profile_result(result)]
        });
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&self, action: &Action, dispatcher: &Dispatcher) -> anyhow::Result<()> {
        match action {
            Action::Auth(AuthAction::LoginSubmit { username, password }) => {
                self.login(dispatcher, username, password);
            }
            Action::Auth(AuthAction::RegisterSubmit {
                username,
                password,
                repeated_password,
            }) => {
                self.register(
                    dispatcher,
                    Registration {
                        username: username.clone(),
                        password: password.clone(),
                        repeated_password: repeated_password.clone(),
                    },
                );
            }
            Action::Render(RenderAction::Navbar) => self.check_session(dispatcher),
            Action::Render(RenderAction::ProfilePage) => {
                dispatcher.dispatch(UserPageAction::GetUser);
            }
            Action::UserPage(UserPageAction::GetUser) => self.get_user(dispatcher),
            Action::UserPage(UserPageAction::UpdateUser(update)) => {
                let update = update.clone();
                let popup_duration = self.popup_duration;
                self.effects.spawn(dispatcher, move |client| async move {
                    profile_saved(client.update_user(&update).await, popup_duration)
                });
            }
            Action::UserPage(UserPageAction::UpdateUserAvatar { file_name, content }) => {
                let file_name = file_name.clone();
                let content = content.clone();
                let popup_duration = self.popup_duration;
                self.effects.spawn(dispatcher, move |client| async move {
                    profile_saved(client.upload_avatar(&file_name, content).await, popup_duration)
                });
            }
            Action::UserPage(UserPageAction::LogoutUser) => {
                let session = Arc::clone(&self.session);
                self.effects.spawn(dispatcher, move |client| async move {
                    if let Err(e) = client.logout().await {
                        log::warn!("Logout request failed: {}", e);
                    }
                    forget(&session);
                    vec![UserPageAction::NoSession.into()]
                });
            }
            _ => {}
        }
        Ok(())
    }
}
