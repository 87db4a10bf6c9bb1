//! Page and fixture render actions
//!
//! Dispatched by the router. Stores reset their state on these, the page
//! host mounts the matching page.

use cinema_client::{GenreId, MovieId, PersonId};
use strum::IntoStaticStr;

#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum RenderAction {
    #[strum(serialize = "MAIN_PAGE")]
    MainPage,
    #[strum(serialize = "RENDER_NAVBAR")]
    Navbar,
    #[strum(serialize = "RENDER_FOOTER")]
    Footer,
    #[strum(serialize = "RENDER_AUTH_REG_PAGE")]
    AuthRegPage,
    #[strum(serialize = "RENDER_MOVIE_PAGE")]
    MoviePage(MovieId),
    #[strum(serialize = "RENDER_PERSON_PAGE")]
    PersonPage(PersonId),
    #[strum(serialize = "RENDER_PROFILE_PAGE")]
    ProfilePage,
    #[strum(serialize = "RENDER_GENRE_PAGE")]
    GenrePage(GenreId),
    #[strum(serialize = "RENDER_GENRES_PAGE")]
    GenresPage,
    /// Search page, optionally with a query to run right away
    #[strum(serialize = "RENDER_SEARCH_PAGE")]
    SearchPage(Option<String>),
    #[strum(serialize = "RENDER_STATS_PAGE")]
    StatsPage,
    #[strum(serialize = "RENDER_CSAT_PAGE")]
    CsatPage,
    /// Embedded survey prompt (not a page)
    #[strum(serialize = "RENDER_CSAT")]
    Csat,
}
