//! Stores module
//!
//! One file per store. Each defines its state type, implements
//! [`StoreState`](crate::store::StoreState) for it and exports a
//! `XxxStore = Store<XxxState>` alias.

pub mod auth;
pub mod csat;
pub mod genre;
pub mod genres;
pub mod main_page;
pub mod movie_page;
pub mod navbar;
pub mod notification;
pub mod person;
pub mod popup;
pub mod search;
pub mod stats;
pub mod user_page;

pub use auth::{AuthState, AuthStatus, AuthStore};
pub use csat::{CsatState, CsatStatus, CsatStore};
pub use genre::{GenreState, GenreStore};
pub use genres::{GenresState, GenresStore};
pub use main_page::{MainPageState, MainPageStore};
pub use movie_page::{MoviePageState, MoviePageStore};
pub use navbar::{NavbarState, NavbarStore};
pub use notification::{Notification, NotificationState, NotificationStore};
pub use person::{PersonState, PersonStore};
pub use popup::{PopupState, PopupStore};
pub use search::{SearchState, SearchStore};
pub use stats::{StatsState, StatsStore};
pub use user_page::{UserPageState, UserPageStore};
