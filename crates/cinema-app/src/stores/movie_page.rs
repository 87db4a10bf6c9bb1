//! Movie page store
//!
//! Tracks the movie currently shown and its reviews. The movie and its
//! reviews each remember the request they are waiting for; results of any
//! other request are stale and dropped.

use cinema_client::{Movie, MovieId, Review};

use crate::actions::{Action, MovieAction, RenderAction};
use crate::loadable::{Loadable, RequestId};
use crate::store::{Store, StoreState};

pub type MoviePageStore = Store<MoviePageState>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePageState {
    pub movie_id: Option<MovieId>,
    pub movie_request: Option<RequestId>,
    pub movie: Loadable<Movie>,
    pub reviews_request: Option<RequestId>,
    pub reviews: Loadable<Vec<Review>>,
    /// A review submitted by the user is on its way
    pub review_posting: bool,
}

impl MoviePageState {
    fn is_current(&self, id: MovieId) -> bool {
        self.movie_id == Some(id)
    }
}

impl StoreState for MoviePageState {
    const NAME: &'static str = "movie_page";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Render(RenderAction::MoviePage(id)) => {
                *self = Self {
                    movie_id: Some(*id),
                    movie: Loadable::Loading,
                    reviews: Loadable::Loading,
                    ..Self::default()
                };
            }
            Action::Movie(MovieAction::LoadMovieData { movie_id, request }) => {
                self.movie_id = Some(*movie_id);
                self.movie_request = Some(*request);
                self.movie = Loadable::Loading;
            }
            Action::Movie(MovieAction::MovieDataLoaded { request, movie }) => {
                if self.movie_request != Some(*request) {
                    log::debug!("movie_page: dropping stale movie {}", movie.id);
                    return false;
                }
                self.movie = Loadable::Loaded(movie.clone());
            }
            Action::Movie(MovieAction::MovieDataError { request, error }) => {
                if self.movie_request != Some(*request) {
                    log::debug!("movie_page: dropping stale error of request {}", request);
                    return false;
                }
                self.movie = Loadable::Failed(error.clone());
            }
            Action::Movie(MovieAction::LoadMovieReviewsData { movie_id, request }) => {
                if !self.is_current(*movie_id) {
                    return false;
                }
                self.reviews_request = Some(*request);
                self.reviews = Loadable::Loading;
            }
            Action::Movie(MovieAction::MovieReviewsDataLoaded { request, reviews }) => {
                if self.reviews_request != Some(*request) {
                    return false;
                }
                self.reviews = Loadable::Loaded(reviews.clone());
                self.review_posting = false;
            }
            Action::Movie(MovieAction::MovieReviewsDataError { request, error }) => {
                if self.reviews_request != Some(*request) {
                    return false;
                }
                self.reviews = Loadable::Failed(error.clone());
                self.review_posting = false;
            }
            Action::Movie(MovieAction::PostMovieReview { movie_id, .. }) => {
                if !self.is_current(*movie_id) {
                    return false;
                }
                self.review_posting = true;
            }
            _ => return false,
        }
        true
    }
}
