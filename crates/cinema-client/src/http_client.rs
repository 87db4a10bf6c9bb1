//! reqwest-based catalog client
//!
//! Direct implementation of the `CatalogClient` trait. Bodies are converted
//! to snake_case on the way out and back to camelCase on the way in.

use crate::case::{deserialize, serialize};
use crate::client::CatalogClient;
use crate::error::{ApiError, ErrorDetails};
use crate::types::{
    Collection, Credentials, Genre, GenreId, GenrePage, Movie, MovieId, NewReview, Person,
    PersonId, Registration, Review, SearchResults, SessionInfo, Stats, User, UserUpdate,
};
use crate::{GENRES_URL, MOVIE_URL, PERSON_URL};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("cinema-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the catalog backend
///
/// Keeps a cookie store so the session cookie set by `auth/login` is sent
/// with every following request.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a new client for the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        // Url::join drops the last segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ApiError::InvalidRequest(format!("{endpoint}: {e}")))
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(endpoint)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Attach a JSON body after rewriting its keys to snake_case
    fn with_body<B: Serialize>(req: RequestBuilder, body: &B) -> Result<RequestBuilder, ApiError> {
        let value = serialize(serde_json::to_value(body)?);
        Ok(req.json(&value))
    }

    /// Send a request and return the raw body of a successful response
    async fn execute(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        let details = serde_json::from_str::<ErrorDetails>(&text).unwrap_or_else(|_| ErrorDetails {
            error: String::new(),
            message: text.clone(),
        });
        debug!("Request failed with {}: {:?}", status, details);
        Err(ApiError::Status {
            status: status.as_u16(),
            details,
        })
    }

    /// Send a request and decode the camelCased response body
    async fn execute_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let text = self.execute(req).await?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(serde_json::from_value(deserialize(value))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let req = self.request(Method::GET, endpoint)?;
        self.execute_json(req).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = Self::with_body(self.request(Method::POST, endpoint)?, body)?;
        self.execute_json(req).await
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn check_session(&self) -> Result<SessionInfo, ApiError> {
        self.get_json("auth/session").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        debug!("Logging in as {}", credentials.username);
        self.post_json("auth/login", credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        debug!("Registering {}", registration.username);
        self.post_json("auth/register", registration).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let req = self.request(Method::POST, "auth/logout")?;
        self.execute(req).await.map(|_| ())
    }

    async fn fetch_user(&self, username: &str) -> Result<User, ApiError> {
        self.get_json(&format!("users/{username}")).await
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.post_json("users", update).await
    }

    async fn upload_avatar(&self, file_name: &str, content: Vec<u8>) -> Result<User, ApiError> {
        debug!("Uploading avatar {} ({} bytes)", file_name, content.len());
        let part = Part::bytes(content).file_name(file_name.to_string());
        let req = self
            .request(Method::POST, "users/avatar")?
            .multipart(Form::new().part("avatar", part));
        self.execute_json(req).await
    }

    async fn fetch_collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.get_json("collections/").await
    }

    async fn fetch_movie(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.get_json(&format!("{MOVIE_URL}/{id}")).await
    }

    async fn fetch_movie_reviews(&self, id: MovieId) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("{MOVIE_URL}/{id}/reviews")).await
    }

    async fn post_movie_review(
        &self,
        id: MovieId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        self.post_json(&format!("{MOVIE_URL}/{id}/reviews"), review)
            .await
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get_json(GENRES_URL).await
    }

    async fn fetch_genre(&self, id: GenreId) -> Result<GenrePage, ApiError> {
        self.get_json(&format!("{GENRES_URL}/{id}")).await
    }

    async fn fetch_person(&self, id: PersonId) -> Result<Person, ApiError> {
        self.get_json(&format!("{PERSON_URL}/{id}")).await
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let req = self
            .request(Method::GET, "search")?
            .query(&[("query", query)]);
        self.execute_json(req).await
    }

    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.get_json("csat/stats").await
    }

    async fn submit_csat(&self, score: u8) -> Result<(), ApiError> {
        let req = Self::with_body(
            self.request(Method::POST, "csat")?,
            &serde_json::json!({ "score": score }),
        )?;
        self.execute(req).await.map(|_| ())
    }
}
