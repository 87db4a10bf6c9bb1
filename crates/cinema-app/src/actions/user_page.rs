//! Profile page actions

use cinema_client::{User, UserUpdate};
use strum::IntoStaticStr;

#[derive(Clone, PartialEq, IntoStaticStr)]
pub enum UserPageAction {
    /// Profile data arrived (fetched or updated)
    #[strum(serialize = "UPDATE_USER_PAGE")]
    UpdateUserPage(User),
    /// Load the signed in user's profile
    #[strum(serialize = "GET_USER")]
    GetUser,
    #[strum(serialize = "UPDATE_USER")]
    UpdateUser(UserUpdate),
    #[strum(serialize = "LOGOUT_USER")]
    LogoutUser,
    /// The backend has no session for us
    #[strum(serialize = "NO_SESSION")]
    NoSession,
    #[strum(serialize = "UPDATE_USER_AVATAR")]
    UpdateUserAvatar { file_name: String, content: Vec<u8> },
    #[strum(serialize = "USER_DATA_ERROR")]
    UserDataError(String),
}

impl std::fmt::Debug for UserPageAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpdateUserPage(user) => f.debug_tuple("UpdateUserPage").field(user).finish(),
            Self::GetUser => write!(f, "GetUser"),
            Self::UpdateUser(update) => f.debug_tuple("UpdateUser").field(update).finish(),
            Self::LogoutUser => write!(f, "LogoutUser"),
            Self::NoSession => write!(f, "NoSession"),
            // Avatar bytes would flood the log
            Self::UpdateUserAvatar { file_name, content } => {
                write!(f, "UpdateUserAvatar({}, {} bytes)", file_name, content.len())
            }
            Self::UserDataError(err) => f.debug_tuple("UserDataError").field(err).finish(),
        }
    }
}
