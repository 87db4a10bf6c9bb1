//! Auth store - login and registration forms
//!
//! Form input is validated here before anything is sent to the backend;
//! the session middleware runs the same checks before it issues a request.

use cinema_client::User;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::actions::{Action, AuthAction, RenderAction, UserPageAction};
use crate::store::{Store, StoreState};

pub type AuthStore = Store<AuthState>;

const LOGIN_MIN: usize = 3;
const LOGIN_MAX: usize = 20;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 32;

static LOGIN_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("login pattern is valid"));

/// Form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Login,
    Password,
    RepeatedPassword,
}

/// Client side form validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("login must be 3 to 20 characters long")]
    LoginLength,
    #[error("login may only contain latin letters, digits and '_'")]
    LoginSymbols,
    #[error("password must be 6 to 32 characters long")]
    PasswordLength,
    #[error("password must not contain whitespace")]
    PasswordWhitespace,
    #[error("passwords do not match")]
    PasswordsMismatch,
}

impl ValidationError {
    /// Stable key a view uses to look up its error display
    pub fn key(&self) -> &'static str {
        match self {
            Self::LoginLength => "login_length",
            Self::LoginSymbols => "login_symbols",
            Self::PasswordLength => "password_length",
            Self::PasswordWhitespace => "password_whitespace",
            Self::PasswordsMismatch => "passwords_mismatch",
        }
    }

    pub fn field(&self) -> AuthField {
        match self {
            Self::LoginLength | Self::LoginSymbols => AuthField::Login,
            Self::PasswordLength | Self::PasswordWhitespace => AuthField::Password,
            Self::PasswordsMismatch => AuthField::RepeatedPassword,
        }
    }
}

/// Why a login or registration attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Error code reported by the backend
    #[error("{0}")]
    Server(String),
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    let login_len = username.chars().count();
    if !(LOGIN_MIN..=LOGIN_MAX).contains(&login_len) {
        return Err(ValidationError::LoginLength);
    }
    if !LOGIN_SYMBOLS.is_match(username) {
        return Err(ValidationError::LoginSymbols);
    }

    let password_len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&password_len) {
        return Err(ValidationError::PasswordLength);
    }
    if password.chars().any(char::is_whitespace) {
        return Err(ValidationError::PasswordWhitespace);
    }
    Ok(())
}

pub fn validate_registration(
    username: &str,
    password: &str,
    repeated_password: &str,
) -> Result<(), ValidationError> {
    validate_login(username, password)?;
    if password != repeated_password {
        return Err(ValidationError::PasswordsMismatch);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    /// Request in flight
    Submitting,
    Authenticated(User),
    Failed(AuthError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match &self.status {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AuthError> {
        match &self.status {
            AuthStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    fn submit(&mut self, validation: Result<(), ValidationError>) {
        self.status = match validation {
            Ok(()) => AuthStatus::Submitting,
            Err(e) => AuthStatus::Failed(e.into()),
        };
    }
}

impl StoreState for AuthState {
    const NAME: &'static str = "auth";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Auth(AuthAction::LoginSubmit { username, password }) => {
                self.submit(validate_login(username, password));
            }
            Action::Auth(AuthAction::RegisterSubmit {
                username,
                password,
                repeated_password,
            }) => {
                self.submit(validate_registration(username, password, repeated_password));
            }
            Action::Auth(AuthAction::LoginSuccess(user))
            | Action::Auth(AuthAction::RegisterSuccess(user))
            | Action::UserPage(UserPageAction::UpdateUserPage(user)) => {
                self.status = AuthStatus::Authenticated(user.clone());
            }
            Action::Auth(AuthAction::SessionRestored(username)) => {
                if self.user().is_some_and(|user| user.username == *username) {
                    return false;
                }
                self.status = AuthStatus::Authenticated(User {
                    username: username.clone(),
                    ..Default::default()
                });
            }
            Action::Auth(AuthAction::LoginError(error))
            | Action::Auth(AuthAction::RegisterError(error)) => {
                self.status = AuthStatus::Failed(error.clone());
            }
            Action::UserPage(UserPageAction::NoSession) => {
                self.status = AuthStatus::Anonymous;
            }
            // Entering the form again drops stale errors
            Action::Render(RenderAction::AuthRegPage) => {
                if !matches!(self.status, AuthStatus::Failed(_)) {
                    return false;
                }
                self.status = AuthStatus::Anonymous;
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> Action {
        Action::Auth(AuthAction::LoginSubmit {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("neo", "matrix1"), Ok(()));
        assert_eq!(validate_login("ne", "matrix1"), Err(ValidationError::LoginLength));
        assert_eq!(
            validate_login("neo!", "matrix1"),
            Err(ValidationError::LoginSymbols)
        );
        assert_eq!(validate_login("neo", "short"), Err(ValidationError::PasswordLength));
        assert_eq!(
            validate_login("neo", "has space"),
            Err(ValidationError::PasswordWhitespace)
        );
    }

    #[test]
    fn test_validate_registration_mismatch() {
        let err = validate_registration("neo", "matrix1", "matrix2").unwrap_err();
        assert_eq!(err, ValidationError::PasswordsMismatch);
        assert_eq!(err.key(), "passwords_mismatch");
        assert_eq!(err.field(), AuthField::RepeatedPassword);
    }

    #[test]
    fn test_invalid_submit_fails_without_request() {
        let mut state = AuthState::default();
        assert!(state.reduce(&login("x", "matrix1")));
        assert_eq!(
            state.error(),
            Some(&AuthError::Validation(ValidationError::LoginLength))
        );
    }

    #[test]
    fn test_login_flow() {
        let mut state = AuthState::default();
        state.reduce(&login("neo", "matrix1"));
        assert_eq!(state.status, AuthStatus::Submitting);

        let user = User {
            username: "neo".to_string(),
            ..Default::default()
        };
        state.reduce(&Action::Auth(AuthAction::LoginSuccess(user.clone())));
        assert_eq!(state.user(), Some(&user));

        state.reduce(&Action::UserPage(UserPageAction::NoSession));
        assert_eq!(state.status, AuthStatus::Anonymous);
    }

    #[test]
    fn test_server_error_and_reset_on_render() {
        let mut state = AuthState::default();
        state.reduce(&Action::Auth(AuthAction::LoginError(AuthError::Server(
            "wrong_credentials".to_string(),
        ))));
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("wrong_credentials")
        );

        assert!(state.reduce(&Action::Render(RenderAction::AuthRegPage)));
        assert_eq!(state.status, AuthStatus::Anonymous);
        assert!(!state.reduce(&Action::Render(RenderAction::AuthRegPage)));
    }
}
