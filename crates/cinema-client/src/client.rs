//! Catalog client trait
//!
//! This module defines the `CatalogClient` trait that every backend
//! implementation must satisfy. The application core only ever talks to
//! the backend through this trait.

use crate::error::ApiError;
use crate::types::{
    Collection, Credentials, Genre, GenreId, GenrePage, Movie, MovieId, NewReview, Person,
    PersonId, Registration, Review, SearchResults, SessionInfo, Stats, User, UserUpdate,
};
use async_trait::async_trait;

/// Cinema catalog backend client
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; requests are issued from tokio
/// tasks spawned by the application middleware.
///
/// # Example
///
/// ```rust,ignore
/// use cinema_client::{CatalogClient, Movie};
///
/// async fn title(client: &dyn CatalogClient) -> Result<String, cinema_client::ApiError> {
///     Ok(client.fetch_movie(42).await?.title)
/// }
/// ```
#[async_trait]
pub trait CatalogClient: Send + Sync {
    // === Authentication ===

    /// Resolve the user behind the current session cookie
    ///
    /// Fails with a 401 status error when there is no session.
    async fn check_session(&self) -> Result<SessionInfo, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    async fn register(&self, registration: &Registration) -> Result<User, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    // === Users ===

    async fn fetch_user(&self, username: &str) -> Result<User, ApiError>;

    /// Update the profile of the current user
    async fn update_user(&self, update: &UserUpdate) -> Result<User, ApiError>;

    /// Upload a new avatar image for the current user
    ///
    /// # Arguments
    ///
    /// * `file_name` - Original file name, used for the multipart part
    /// * `content` - Raw image bytes
    async fn upload_avatar(&self, file_name: &str, content: Vec<u8>) -> Result<User, ApiError>;

    // === Catalog ===

    /// Collections shown on the main page
    async fn fetch_collections(&self) -> Result<Vec<Collection>, ApiError>;

    async fn fetch_movie(&self, id: MovieId) -> Result<Movie, ApiError>;

    async fn fetch_movie_reviews(&self, id: MovieId) -> Result<Vec<Review>, ApiError>;

    async fn post_movie_review(&self, id: MovieId, review: &NewReview)
    -> Result<Review, ApiError>;

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ApiError>;

    async fn fetch_genre(&self, id: GenreId) -> Result<GenrePage, ApiError>;

    async fn fetch_person(&self, id: PersonId) -> Result<Person, ApiError>;

    async fn search(&self, query: &str) -> Result<SearchResults, ApiError>;

    // === Satisfaction surveys ===

    async fn fetch_stats(&self) -> Result<Stats, ApiError>;

    /// Submit a satisfaction score (1..=5)
    async fn submit_csat(&self, score: u8) -> Result<(), ApiError>;
}
