use cinema_client::User;

use crate::actions::{Action, RenderAction, UserPageAction};
use crate::loadable::Loadable;
use crate::store::{Store, StoreState};

pub type UserPageStore = Store<UserPageState>;

/// Profile page of the signed-in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPageState {
    pub profile: Loadable<User>,
}

impl StoreState for UserPageState {
    const NAME: &'static str = "user_page";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::ProfilePage) | Action::UserPage(UserPageAction::GetUser) => {
                if self.profile.is_loading() {
                    return false;
                }
                self.profile = Loadable::Loading;
            }
            Action::UserPage(UserPageAction::UpdateUserPage(user)) => {
                self.profile = Loadable::Loaded(user.clone())
            }
            Action::UserPage(UserPageAction::UserDataError(error)) => {
                self.profile = Loadable::Failed(error.clone())
            }
            Action::UserPage(UserPageAction::NoSession | UserPageAction::LogoutUser) => {
                self.profile = Loadable::Idle
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lifecycle() {
        let mut state = UserPageState::default();
        assert!(state.reduce(&RenderAction::ProfilePage.into()));
        // GET_USER follows the render; already loading
        assert!(!state.reduce(&UserPageAction::GetUser.into()));

        let user = User {
            username: "trinity".to_string(),
            ..User::default()
        };
        state.reduce(&UserPageAction::UpdateUserPage(user.clone()).into());
        assert_eq!(state.profile.data(), Some(&user));

        state.reduce(&UserPageAction::LogoutUser.into());
        assert_eq!(state.profile, Loadable::Idle);
    }
}
