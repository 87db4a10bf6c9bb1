//! Login and registration actions

use cinema_client::User;
use strum::IntoStaticStr;

use crate::stores::auth::AuthError;

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum AuthAction {
    /// Login form submitted
    #[strum(serialize = "LOGIN_SUBMIT")]
    LoginSubmit { username: String, password: String },
    #[strum(serialize = "LOGIN_SUCCESS")]
    LoginSuccess(User),
    #[strum(serialize = "LOGIN_ERROR")]
    LoginError(AuthError),

    /// Registration form submitted
    #[strum(serialize = "REGISTER_SUBMIT")]
    RegisterSubmit {
        username: String,
        password: String,
        repeated_password: String,
    },
    #[strum(serialize = "REGISTER_SUCCESS")]
    RegisterSuccess(User),
    #[strum(serialize = "REGISTER_ERROR")]
    RegisterError(AuthError),

    /// A live session was found at startup (carries the username)
    #[strum(serialize = "SESSION_RESTORED")]
    SessionRestored(String),
}
