//! Movie page actions
//!
//! Loads carry a [`RequestId`]; the loaded/error follow-ups echo it back.

use cinema_client::{Movie, MovieId, NewReview, Review};
use strum::IntoStaticStr;

use crate::loadable::RequestId;

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum MovieAction {
    #[strum(serialize = "LOAD_MOVIE_DATA")]
    LoadMovieData {
        movie_id: MovieId,
        request: RequestId,
    },
    #[strum(serialize = "MOVIE_DATA_LOADED")]
    MovieDataLoaded { request: RequestId, movie: Movie },
    #[strum(serialize = "MOVIE_DATA_ERROR")]
    MovieDataError { request: RequestId, error: String },

    #[strum(serialize = "LOAD_MOVIE_REVIEWS_DATA")]
    LoadMovieReviewsData {
        movie_id: MovieId,
        request: RequestId,
    },
    #[strum(serialize = "MOVIE_REVIEWS_DATA_LOADED")]
    MovieReviewsDataLoaded {
        request: RequestId,
        reviews: Vec<Review>,
    },
    #[strum(serialize = "MOVIE_REVIEWS_DATA_ERROR")]
    MovieReviewsDataError { request: RequestId, error: String },

    #[strum(serialize = "POST_MOVIE_REVIEW")]
    PostMovieReview { movie_id: MovieId, review: NewReview },
}

impl MovieAction {
    /// Start loading a movie under a fresh request id
    pub fn load_movie(movie_id: MovieId) -> Self {
        Self::LoadMovieData {
            movie_id,
            request: RequestId::next(),
        }
    }

    /// Start loading a movie's reviews under a fresh request id
    pub fn load_reviews(movie_id: MovieId) -> Self {
        Self::LoadMovieReviewsData {
            movie_id,
            request: RequestId::next(),
        }
    }
}
