use crate::actions::{Action, AuthAction, RenderAction, UserPageAction};
use crate::store::{Store, StoreState};

pub type NavbarStore = Store<NavbarState>;

/// Navigation bar fixture: shown once at startup, tracks who is signed in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub visible: bool,
    pub username: Option<String>,
}

impl NavbarState {
    fn set_username(&mut self, username: &str) -> bool {
        if self.username.as_deref() == Some(username) {
            return false;
        }
        self.username = Some(username.to_string());
        true
    }
}

impl StoreState for NavbarState {
    const NAME: &'static str = "navbar";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::Navbar) => {
                let changed = !self.visible;
                self.visible = true;
                changed
            }
            Action::Auth(AuthAction::LoginSuccess(user) | AuthAction::RegisterSuccess(user))
            | Action::UserPage(UserPageAction::UpdateUserPage(user)) => {
                self.set_username(&user.username)
            }
            Action::Auth(AuthAction::SessionRestored(username)) => self.set_username(username),
            Action::UserPage(UserPageAction::NoSession) => self.username.take().is_some(),
            _ => false,
        }
    }
}
