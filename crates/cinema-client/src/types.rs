//! Catalog data transfer objects
//!
//! Field names follow the client side camelCase convention; the
//! [`crate::case`] module handles the snake_case wire format.

use serde::{Deserialize, Serialize};

/// Movie identifier as it appears in `/movie/:id`
pub type MovieId = u64;

/// Person identifier as it appears in `/name/:id`
pub type PersonId = u64;

/// Genre identifier as it appears in `/genre/:id`
pub type GenreId = u64;

/// A registered user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Profile fields a user may change; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// Login form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub repeated_password: String,
}

/// Response of `auth/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
}

/// Compact movie representation used in lists and carousels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePreview {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A named group of movies shown on the main page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub movies: Vec<MoviePreview>,
}

/// A person credited on a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: PersonId,
    pub name: String,
    /// Credit role (e.g., "director", "actor")
    #[serde(default)]
    pub role: Option<String>,
}

/// Full movie details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub persons: Vec<PersonRef>,
}

/// A user review of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Review submitted by the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Full person details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub career: Vec<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub movies: Vec<MoviePreview>,
}

/// Compact person representation used in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPreview {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Response of `genres/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenrePage {
    pub genre: Genre,
    #[serde(default)]
    pub movies: Vec<MoviePreview>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub movies: Vec<MoviePreview>,
    #[serde(default)]
    pub persons: Vec<PersonPreview>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.persons.is_empty()
    }
}

/// Satisfaction survey statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub average_score: f64,
    pub total_votes: u64,
    /// Vote count per score, index 0 holds score 1
    #[serde(default)]
    pub distribution: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{deserialize, serialize};
    use serde_json::json;

    #[test]
    fn test_movie_from_wire_format() {
        let wire = json!({
            "id": 42,
            "title": "Stalker",
            "original_title": "Сталкер",
            "year": 1979,
            "genres": ["drama"],
            "persons": [{ "id": 7, "name": "Andrei Tarkovsky", "role": "director" }],
        });

        let movie: Movie = serde_json::from_value(deserialize(wire)).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.original_title.as_deref(), Some("Сталкер"));
        assert_eq!(movie.persons[0].role.as_deref(), Some("director"));
        assert!(movie.description.is_none());
    }

    #[test]
    fn test_registration_to_wire_format() {
        let registration = Registration {
            username: "neo".to_string(),
            password: "matrix1".to_string(),
            repeated_password: "matrix1".to_string(),
        };

        let wire = serialize(serde_json::to_value(&registration).unwrap());
        assert_eq!(
            wire,
            json!({ "username": "neo", "password": "matrix1", "repeated_password": "matrix1" })
        );
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            birth_date: Some("2000-02-02".to_string()),
            ..Default::default()
        };
        let wire = serialize(serde_json::to_value(&update).unwrap());
        assert_eq!(wire, json!({ "birth_date": "2000-02-02" }));
    }
}
