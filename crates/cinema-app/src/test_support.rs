//! In-memory catalog backend and helpers for async tests

use async_trait::async_trait;
use cinema_client::{
    ApiError, CatalogClient, Collection, Credentials, ErrorDetails, Genre, GenreId, GenrePage,
    Movie, MovieId, NewReview, Person, PersonId, Registration, Review, SearchResults, SessionInfo,
    Stats, User, UserUpdate,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Movie id the fake backend answers with `not_found`
pub const MISSING_MOVIE: MovieId = 404;

/// Password the fake backend rejects with `wrong_credentials`
pub const WRONG_PASSWORD: &str = "wrong-password";

pub fn status_error(status: u16, error: &str) -> ApiError {
    ApiError::Status {
        status,
        details: ErrorDetails {
            error: error.to_string(),
            message: String::new(),
        },
    }
}

pub fn user(username: &str) -> User {
    User {
        username: username.to_string(),
        ..User::default()
    }
}

pub fn movie(id: MovieId) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        original_title: None,
        description: None,
        year: None,
        rating: None,
        poster: None,
        genres: vec![],
        persons: vec![],
    }
}

#[derive(Default)]
pub struct FakeClient {
    session: Mutex<Option<String>>,
    movie_delays: HashMap<MovieId, Duration>,
    /// Scripted `fetch_stats` replies: delay, then an error code or success
    stats_replies: Mutex<VecDeque<(Duration, Option<String>)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(self, username: &str) -> Self {
        *self.session.lock().unwrap() = Some(username.to_string());
        self
    }

    /// Delay `fetch_movie(id)` by `delay`
    pub fn with_movie_delay(mut self, id: MovieId, delay: Duration) -> Self {
        self.movie_delays.insert(id, delay);
        self
    }

    /// Script the reply of the next `fetch_stats` call
    pub fn with_stats_reply(self, delay: Duration, error: Option<&str>) -> Self {
        self.stats_replies
            .lock()
            .unwrap()
            .push_back((delay, error.map(str::to_string)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn session_user(&self) -> Result<String, ApiError> {
        self.session
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| status_error(401, "no_session"))
    }
}

#[async_trait]
impl CatalogClient for FakeClient {
    async fn check_session(&self) -> Result<SessionInfo, ApiError> {
        self.record("check_session");
        Ok(SessionInfo {
            username: self.session_user()?,
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.record(format!("login {}", credentials.username));
        if credentials.password == WRONG_PASSWORD {
            return Err(status_error(403, "wrong_credentials"));
        }
        *self.session.lock().unwrap() = Some(credentials.username.clone());
        Ok(user(&credentials.username))
    }

    async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.record(format!("register {}", registration.username));
        *self.session.lock().unwrap() = Some(registration.username.clone());
        Ok(user(&registration.username))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.session.lock().unwrap().take();
        Ok(())
    }

    async fn fetch_user(&self, username: &str) -> Result<User, ApiError> {
        self.record(format!("fetch_user {}", username));
        Ok(user(username))
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.record("update_user");
        let mut user = user(&self.session_user()?);
        user.name = update.name.clone();
        user.email = update.email.clone();
        Ok(user)
    }

    async fn upload_avatar(&self, file_name: &str, _content: Vec<u8>) -> Result<User, ApiError> {
        self.record(format!("upload_avatar {}", file_name));
        let mut user = user(&self.session_user()?);
        user.avatar = Some(format!("/media/{}", file_name));
        Ok(user)
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.record("fetch_collections");
        Ok(vec![Collection {
            id: Some(1),
            title: "Popular".to_string(),
            movies: vec![],
        }])
    }

    async fn fetch_movie(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.record(format!("fetch_movie {}", id));
        if let Some(delay) = self.movie_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        if id == MISSING_MOVIE {
            return Err(status_error(404, "not_found"));
        }
        Ok(movie(id))
    }

    async fn fetch_movie_reviews(&self, id: MovieId) -> Result<Vec<Review>, ApiError> {
        self.record(format!("fetch_movie_reviews {}", id));
        Ok(vec![])
    }

    async fn post_movie_review(
        &self,
        id: MovieId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        self.record(format!("post_movie_review {}", id));
        Ok(Review {
            id: 1,
            author: self.session_user()?,
            text: review.text.clone(),
            rating: review.rating,
            created_at: None,
        })
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.record("fetch_genres");
        Ok(vec![Genre {
            id: 1,
            name: "drama".to_string(),
        }])
    }

    async fn fetch_genre(&self, id: GenreId) -> Result<GenrePage, ApiError> {
        self.record(format!("fetch_genre {}", id));
        Ok(GenrePage {
            genre: Genre {
                id,
                name: "drama".to_string(),
            },
            movies: vec![],
        })
    }

    async fn fetch_person(&self, id: PersonId) -> Result<Person, ApiError> {
        self.record(format!("fetch_person {}", id));
        Ok(Person {
            id,
            name: "Andrei Tarkovsky".to_string(),
            photo: None,
            career: vec![],
            birth_date: None,
            movies: vec![],
        })
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        self.record(format!("search {}", query));
        Ok(SearchResults::default())
    }

    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.record("fetch_stats");
        let reply = self.stats_replies.lock().unwrap().pop_front();
        if let Some((delay, error)) = reply {
            tokio::time::sleep(delay).await;
            if let Some(error) = error {
                return Err(status_error(500, &error));
            }
        }
        Ok(Stats {
            average_score: 4.5,
            total_votes: 2,
            distribution: vec![0, 0, 0, 1, 1],
        })
    }

    async fn submit_csat(&self, score: u8) -> Result<(), ApiError> {
        self.record(format!("submit_csat {}", score));
        Ok(())
    }
}

/// Yield to spawned tasks until `condition` holds
///
/// Meant for current-thread runtimes, where spawned tasks only make
/// progress while the test awaits.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
