//! Load actions for the catalog pages
//!
//! Main page, person, genre(s), search and stats all follow the same
//! load / loaded / error shape. The load carries a fresh [`RequestId`]
//! and the result echoes it, so a store can tell the answer to its latest
//! request apart from a late one.

use cinema_client::{
    Collection, Genre, GenreId, GenrePage, Person, PersonId, SearchResults, Stats,
};
use strum::IntoStaticStr;

use crate::loadable::RequestId;

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum MainPageAction {
    #[strum(serialize = "LOAD_MAIN_PAGE_DATA")]
    Load(RequestId),
    #[strum(serialize = "MAIN_PAGE_DATA_LOADED")]
    DataLoaded {
        request: RequestId,
        collections: Vec<Collection>,
    },
    #[strum(serialize = "MAIN_PAGE_DATA_ERROR")]
    DataError { request: RequestId, error: String },
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum PersonAction {
    #[strum(serialize = "LOAD_PERSON_DATA")]
    Load {
        person_id: PersonId,
        request: RequestId,
    },
    #[strum(serialize = "PERSON_DATA_LOADED")]
    DataLoaded { request: RequestId, person: Person },
    #[strum(serialize = "PERSON_DATA_ERROR")]
    DataError { request: RequestId, error: String },
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum GenreAction {
    #[strum(serialize = "LOAD_GENRE_DATA")]
    Load {
        genre_id: GenreId,
        request: RequestId,
    },
    #[strum(serialize = "GENRE_DATA_LOADED")]
    DataLoaded { request: RequestId, page: GenrePage },
    #[strum(serialize = "GENRE_DATA_ERROR")]
    DataError { request: RequestId, error: String },
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum GenresAction {
    #[strum(serialize = "LOAD_GENRES_DATA")]
    Load(RequestId),
    #[strum(serialize = "GENRES_DATA_LOADED")]
    DataLoaded {
        request: RequestId,
        genres: Vec<Genre>,
    },
    #[strum(serialize = "GENRES_DATA_ERROR")]
    DataError { request: RequestId, error: String },
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum SearchAction {
    #[strum(serialize = "SEARCH_SUBMIT")]
    Submit { query: String, request: RequestId },
    #[strum(serialize = "SEARCH_RESULTS_LOADED")]
    ResultsLoaded {
        request: RequestId,
        results: SearchResults,
    },
    #[strum(serialize = "SEARCH_ERROR")]
    Error { request: RequestId, error: String },
}

impl SearchAction {
    /// Submit `query` under a fresh request id
    pub fn submit(query: impl Into<String>) -> Self {
        Self::Submit {
            query: query.into(),
            request: RequestId::next(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum StatsAction {
    #[strum(serialize = "LOAD_STATS_DATA")]
    Load(RequestId),
    #[strum(serialize = "STATS_DATA_LOADED")]
    DataLoaded { request: RequestId, stats: Stats },
    #[strum(serialize = "STATS_DATA_ERROR")]
    DataError { request: RequestId, error: String },
}
