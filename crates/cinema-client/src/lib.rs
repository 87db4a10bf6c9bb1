//! REST client for the cinema catalog backend
//!
//! This crate provides a trait-based client so the application core can be
//! exercised without a server. The HTTP implementation talks to the backend
//! with reqwest; tests substitute their own implementation of the trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              CatalogClient trait                │
//! │  - check_session() / login() / register()       │
//! │  - fetch_movie() / fetch_person() / search()    │
//! │  - submit_csat() / fetch_stats()                │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌───────────────────┐
//!              │ HttpCatalogClient │
//!              │ (reqwest)         │
//!              └───────────────────┘
//! ```
//!
//! Every JSON body crossing the boundary is rewritten between camelCase
//! (client side) and snake_case (wire side) by the [`case`] module.
//!
//! # Example
//!
//! ```rust,no_run
//! use cinema_client::{CatalogClient, HttpCatalogClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpCatalogClient::new("http://localhost:8080/", 10)?;
//! let movie = client.fetch_movie(42).await?;
//! println!("{}", movie.title);
//! # Ok(())
//! # }
//! ```

pub mod case;
pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

/// Endpoint prefix for movie resources
pub const MOVIE_URL: &str = "movies";

/// Endpoint prefix for genre resources
pub const GENRES_URL: &str = "genres";

/// Endpoint prefix for person resources
pub const PERSON_URL: &str = "persons";

pub use case::{deserialize, serialize};
pub use client::CatalogClient;
pub use error::{ApiError, ErrorDetails, GENERIC_ERROR};
pub use http_client::HttpCatalogClient;
pub use types::{
    Collection, Credentials, Genre, GenreId, GenrePage, Movie, MovieId, MoviePreview, NewReview, Person,
    PersonId, PersonPreview, PersonRef, Registration, Review, SearchResults, SessionInfo, Stats,
    User, UserUpdate,
};
