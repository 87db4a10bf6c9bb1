//! Actions module
//!
//! Every state change in the application is described by an [`Action`].
//! Actions are grouped by domain; each family enum knows the exact wire
//! tag of its variants (`LOGIN_SUBMIT`, `RENDER_MOVIE_PAGE`, ...), which
//! [`Action::type_tag`] exposes for logging and matching.

pub mod auth;
pub mod catalog;
pub mod csat;
pub mod movie;
pub mod notification;
pub mod popup;
pub mod render;
pub mod user_page;

pub use auth::AuthAction;
pub use catalog::{
    GenreAction, GenresAction, MainPageAction, PersonAction, SearchAction, StatsAction,
};
pub use csat::CsatAction;
pub use movie::MovieAction;
pub use notification::{NotificationAction, NotificationLevel};
pub use popup::{Popup, PopupAction, PopupKind};
pub use render::RenderAction;
pub use user_page::UserPageAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Login / registration
    Auth(AuthAction),
    /// Page and fixture rendering (dispatched by the router)
    Render(RenderAction),
    /// Profile page
    UserPage(UserPageAction),
    /// Movie page data and reviews
    Movie(MovieAction),
    MainPage(MainPageAction),
    Person(PersonAction),
    Genre(GenreAction),
    Genres(GenresAction),
    Search(SearchAction),
    Stats(StatsAction),
    Csat(CsatAction),
    Popup(PopupAction),
    Notification(NotificationAction),
}

impl Action {
    /// The wire tag of this action (e.g., `"RENDER_MOVIE_PAGE"`)
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Auth(a) => a.into(),
            Self::Render(a) => a.into(),
            Self::UserPage(a) => a.into(),
            Self::Movie(a) => a.into(),
            Self::MainPage(a) => a.into(),
            Self::Person(a) => a.into(),
            Self::Genre(a) => a.into(),
            Self::Genres(a) => a.into(),
            Self::Search(a) => a.into(),
            Self::Stats(a) => a.into(),
            Self::Csat(a) => a.into(),
            Self::Popup(a) => a.into(),
            Self::Notification(a) => a.into(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<RenderAction> for Action {
    fn from(action: RenderAction) -> Self {
        Self::Render(action)
    }
}

impl From<UserPageAction> for Action {
    fn from(action: UserPageAction) -> Self {
        Self::UserPage(action)
    }
}

impl From<MovieAction> for Action {
    fn from(action: MovieAction) -> Self {
        Self::Movie(action)
    }
}

impl From<MainPageAction> for Action {
    fn from(action: MainPageAction) -> Self {
        Self::MainPage(action)
    }
}

impl From<PersonAction> for Action {
    fn from(action: PersonAction) -> Self {
        Self::Person(action)
    }
}

impl From<GenreAction> for Action {
    fn from(action: GenreAction) -> Self {
        Self::Genre(action)
    }
}

impl From<GenresAction> for Action {
    fn from(action: GenresAction) -> Self {
        Self::Genres(action)
    }
}

impl From<SearchAction> for Action {
    fn from(action: SearchAction) -> Self {
        Self::Search(action)
    }
}

impl From<StatsAction> for Action {
    fn from(action: StatsAction) -> Self {
        Self::Stats(action)
    }
}

impl From<CsatAction> for Action {
    fn from(action: CsatAction) -> Self {
        Self::Csat(action)
    }
}

impl From<PopupAction> for Action {
    fn from(action: PopupAction) -> Self {
        Self::Popup(action)
    }
}

impl From<NotificationAction> for Action {
    fn from(action: NotificationAction) -> Self {
        Self::Notification(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadable::RequestId;
    use std::time::Duration;

    #[test]
    fn test_type_tags_match_wire_names() {
        let cases: Vec<(Action, &str)> = vec![
            (
                AuthAction::LoginSubmit {
                    username: "neo".into(),
                    password: "matrix1".into(),
                }
                .into(),
                "LOGIN_SUBMIT",
            ),
            (RenderAction::MainPage.into(), "MAIN_PAGE"),
            (RenderAction::AuthRegPage.into(), "RENDER_AUTH_REG_PAGE"),
            (RenderAction::MoviePage(42).into(), "RENDER_MOVIE_PAGE"),
            (RenderAction::Csat.into(), "RENDER_CSAT"),
            (UserPageAction::NoSession.into(), "NO_SESSION"),
            (MovieAction::load_reviews(1).into(), "LOAD_MOVIE_REVIEWS_DATA"),
            (StatsAction::Load(RequestId::next()).into(), "LOAD_STATS_DATA"),
            (
                PopupAction::Show(Popup::info("hi", Duration::from_secs(1))).into(),
                "SHOW_POPUP",
            ),
            (PopupAction::Hide { id: None }.into(), "HIDE_POPUP"),
            (
                StatsAction::DataError {
                    request: RequestId::next(),
                    error: "x".into(),
                }
                .into(),
                "STATS_DATA_ERROR",
            ),
        ];

        for (action, tag) in cases {
            assert_eq!(action.type_tag(), tag);
        }
    }

    #[test]
    fn test_popup_ids_are_unique() {
        let a = Popup::info("a", Duration::from_secs(1));
        let b = Popup::info("a", Duration::from_secs(1));
        assert_ne!(a.id, b.id);
    }
}
