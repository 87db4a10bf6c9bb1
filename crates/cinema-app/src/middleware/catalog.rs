//! Catalog Middleware
//!
//! Loads page data when a page renders. A render is turned into a load
//! action carrying a fresh request id; the loaded/error follow-up echoes
//! that id so the stores can drop responses that arrive after the user has
//! moved on.

use cinema_client::{GenreId, MovieId, NewReview, PersonId, SearchResults};
use std::time::Duration;

use crate::actions::{
    Action, GenreAction, GenresAction, MainPageAction, MovieAction, PersonAction, Popup,
    PopupAction, RenderAction, SearchAction, StatsAction,
};
use crate::dispatcher::Dispatcher;
use crate::loadable::RequestId;
use crate::middleware::{Effects, Middleware};

pub struct CatalogMiddleware {
    effects: Effects,
    popup_duration: Duration,
}

impl CatalogMiddleware {
    pub fn new(effects: Effects, popup_duration: Duration) -> Self {
        Self {
            effects,
            popup_duration,
        }
    }

    fn load_collections(&self, dispatcher: &Dispatcher, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_collections().await {
                Ok(collections) => MainPageAction::DataLoaded {
                    request,
                    collections,
                },
                Err(e) => {
                    log::warn!("Failed to load collections: {}", e);
                    MainPageAction::DataError {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }

    fn load_movie(&self, dispatcher: &Dispatcher, movie_id: MovieId, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_movie(movie_id).await {
                Ok(movie) => MovieAction::MovieDataLoaded { request, movie },
                Err(e) => {
                    log::warn!("Failed to load movie {}: {}", movie_id, e);
                    MovieAction::MovieDataError {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }

    fn load_reviews(&self, dispatcher: &Dispatcher, movie_id: MovieId, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_movie_reviews(movie_id).await {
                Ok(reviews) => MovieAction::MovieReviewsDataLoaded { request, reviews },
                Err(e) => {
                    log::warn!("Failed to load reviews of movie {}: {}", movie_id, e);
                    MovieAction::MovieReviewsDataError {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }

    fn post_review(&self, dispatcher: &Dispatcher, movie_id: MovieId, review: NewReview) {
        let popup_duration = self.popup_duration;
        self.effects.spawn(dispatcher, move |client| async move {
            let popup = match client.post_movie_review(movie_id, &review).await {
                Ok(_) => Popup::success("Review published", popup_duration),
                Err(e) => {
                    log::warn!("Failed to post review for movie {}: {}", movie_id, e);
                    Popup::error(e.error_code(), popup_duration)
                }
            };
            // Reloading the reviews also ends the posting state
            vec![
                PopupAction::Show(popup).into(),
                MovieAction::load_reviews(movie_id).into(),
            ]
        });
    }

    fn load_person(&self, dispatcher: &Dispatcher, person_id: PersonId, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_person(person_id).await {
                Ok(person) => PersonAction::DataLoaded { request, person },
                Err(e) => {
                    log::warn!("Failed to load person {}: {}", person_id, e);
                    PersonAction::DataError {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }

    fn load_genre(&self, dispatcher: &Dispatcher, genre_id: GenreId, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_genre(genre_id).await {
                Ok(page) => GenreAction::DataLoaded { request, page },
                Err(e) => {
                    log::warn!("Failed to load genre {}: {}", genre_id, e);
                    GenreAction::DataError {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }

    fn load_genres(&self, dispatcher: &Dispatcher, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_genres().await {
                Ok(genres) => GenresAction::DataLoaded { request, genres },
                Err(e) => GenresAction::DataError {
                    request,
                    error: e.error_code(),
                },
            };
            vec![action.into()]
        });
    }

    fn load_stats(&self, dispatcher: &Dispatcher, request: RequestId) {
        self.effects.spawn(dispatcher, move |client| async move {
            let action = match client.fetch_stats().await {
                Ok(stats) => StatsAction::DataLoaded { request, stats },
                Err(e) => StatsAction::DataError {
                    request,
                    error: e.error_code(),
                },
            };
            vec![action.into()]
        });
    }

    fn search(&self, dispatcher: &Dispatcher, query: &str, request: RequestId) {
        if query.trim().is_empty() {
            dispatcher.dispatch(SearchAction::ResultsLoaded {
                request,
                results: SearchResults::default(),
            });
            return;
        }
        let query = query.to_string();
        self.effects.spawn(dispatcher, move |client| async move {
            let result = client.search(&query).await;
            let action = match result {
                Ok(results) => SearchAction::ResultsLoaded { request, results },
                Err(e) => {
                    log::warn!("Search for '{}' failed: {}", query, e);
                    SearchAction::Error {
                        request,
                        error: e.error_code(),
                    }
                }
            };
            vec![action.into()]
        });
    }
}

impl Middleware for CatalogMiddleware {
    fn handle(&self, action: &Action, dispatcher: &Dispatcher) -> anyhow::Result<()> {
        match action {
            // Pages: start a load under a fresh request id
            Action::Render(RenderAction::MainPage) => {
                dispatcher.dispatch(MainPageAction::Load(RequestId::next()));
            }
            Action::Render(RenderAction::MoviePage(id)) => {
                dispatcher.dispatch(MovieAction::load_movie(*id));
                dispatcher.dispatch(MovieAction::load_reviews(*id));
            }
            Action::Render(RenderAction::PersonPage(id)) => {
                dispatcher.dispatch(PersonAction::Load {
                    person_id: *id,
                    request: RequestId::next(),
                });
            }
            Action::Render(RenderAction::GenrePage(id)) => {
                dispatcher.dispatch(GenreAction::Load {
                    genre_id: *id,
                    request: RequestId::next(),
                });
            }
            Action::Render(RenderAction::GenresPage) => {
                dispatcher.dispatch(GenresAction::Load(RequestId::next()));
            }
            Action::Render(RenderAction::StatsPage) => {
                dispatcher.dispatch(StatsAction::Load(RequestId::next()));
            }
            Action::Render(RenderAction::SearchPage(Some(query))) => {
                dispatcher.dispatch(SearchAction::submit(query.clone()));
            }

            // Loads
            Action::MainPage(MainPageAction::Load(request)) => {
                self.load_collections(dispatcher, *request)
            }
            Action::Movie(MovieAction::LoadMovieData { movie_id, request }) => {
                self.load_movie(dispatcher, *movie_id, *request)
            }
            Action::Movie(MovieAction::LoadMovieReviewsData { movie_id, request }) => {
                self.load_reviews(dispatcher, *movie_id, *request)
            }
            Action::Movie(MovieAction::PostMovieReview { movie_id, review }) => {
                self.post_review(dispatcher, *movie_id, review.clone())
            }
            Action::Person(PersonAction::Load { person_id, request }) => {
                self.load_person(dispatcher, *person_id, *request)
            }
            Action::Genre(GenreAction::Load { genre_id, request }) => {
                self.load_genre(dispatcher, *genre_id, *request)
            }
            Action::Genres(GenresAction::Load(request)) => self.load_genres(dispatcher, *request),
            Action::Stats(StatsAction::Load(request)) => self.load_stats(dispatcher, *request),
            Action::Search(SearchAction::Submit { query, request }) => {
                self.search(dispatcher, query, *request)
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadable::Loadable;
    use crate::middleware::register;
    use crate::stores::{
        GenreStore, GenresStore, MainPageStore, MoviePageStore, PersonStore, PopupStore,
        SearchStore, StatsStore,
    };
    use crate::test_support::{FakeClient, MISSING_MOVIE, wait_until};
    use std::sync::Arc;
    use tokio::runtime::Handle;

    struct Harness {
        dispatcher: Dispatcher,
        client: Arc<FakeClient>,
        movie_page: Arc<MoviePageStore>,
        main_page: Arc<MainPageStore>,
        search: Arc<SearchStore>,
        popup: Arc<PopupStore>,
        person: Arc<PersonStore>,
        genre: Arc<GenreStore>,
        genres: Arc<GenresStore>,
        stats: Arc<StatsStore>,
    }

    fn harness(client: FakeClient) -> Harness {
        let dispatcher = Dispatcher::new();
        let client = Arc::new(client);
        let movie_page = Arc::new(MoviePageStore::default());
        let main_page = Arc::new(MainPageStore::default());
        let search = Arc::new(SearchStore::default());
        let popup = Arc::new(PopupStore::default());
        let person = Arc::new(PersonStore::default());
        let genre = Arc::new(GenreStore::default());
        let genres = Arc::new(GenresStore::default());
        let stats = Arc::new(StatsStore::default());
        movie_page.attach(&dispatcher);
        main_page.attach(&dispatcher);
        search.attach(&dispatcher);
        popup.attach(&dispatcher);
        person.attach(&dispatcher);
        genre.attach(&dispatcher);
        genres.attach(&dispatcher);
        stats.attach(&dispatcher);
        register(
            &dispatcher,
            Arc::new(CatalogMiddleware::new(
                Effects::new(client.clone(), Handle::current()),
                Duration::from_secs(1),
            )),
        );
        Harness {
            dispatcher,
            client,
            movie_page,
            main_page,
            search,
            popup,
            person,
            genre,
            genres,
            stats,
        }
    }

    #[tokio::test]
    async fn test_movie_page_loads_movie_and_reviews() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::MoviePage(42));

        wait_until(|| {
            let state = h.movie_page.get_state();
            state.movie.is_loaded() && state.reviews.is_loaded()
        })
        .await;

        let state = h.movie_page.get_state();
        assert_eq!(state.movie.data().map(|m| m.id), Some(42));
        assert_eq!(state.reviews, Loadable::Loaded(vec![]));
    }

    #[tokio::test]
    async fn test_missing_movie_surfaces_error_code() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::MoviePage(MISSING_MOVIE));

        wait_until(|| h.movie_page.get_state().movie.error().is_some()).await;

        assert_eq!(h.movie_page.get_state().movie.error(), Some("not_found"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_response_for_previous_movie_is_ignored() {
        let client = FakeClient::new()
            .with_movie_delay(1, Duration::from_millis(300))
            .with_movie_delay(2, Duration::from_millis(10));
        let h = harness(client);

        h.dispatcher.dispatch(RenderAction::MoviePage(1));
        h.dispatcher.dispatch(RenderAction::MoviePage(2));

        tokio::time::sleep(Duration::from_millis(500)).await;

        let state = h.movie_page.get_state();
        assert_eq!(state.movie_id, Some(2));
        assert_eq!(state.movie.data().map(|m| m.id), Some(2));
        assert!(h.client.calls().contains(&"fetch_movie 1".to_string()));
    }

    #[tokio::test]
    async fn test_posted_review_reloads_reviews() {
        let h = harness(FakeClient::new().with_session("neo"));
        h.dispatcher.dispatch(RenderAction::MoviePage(7));
        wait_until(|| h.movie_page.get_state().reviews.is_loaded()).await;

        h.dispatcher.dispatch(MovieAction::PostMovieReview {
            movie_id: 7,
            review: NewReview {
                text: "Slow and beautiful".to_string(),
                rating: Some(5),
            },
        });
        assert!(h.movie_page.get_state().review_posting);

        wait_until(|| !h.movie_page.get_state().review_posting).await;

        assert_eq!(
            h.popup.get_state().current.map(|p| p.message),
            Some("Review published".to_string())
        );
        let reloads = h
            .client
            .calls()
            .iter()
            .filter(|c| *c == "fetch_movie_reviews 7")
            .count();
        assert_eq!(reloads, 2);
    }

    #[tokio::test]
    async fn test_search_page_with_query_submits() {
        let h = harness(FakeClient::new());
        h.dispatcher
            .dispatch(RenderAction::SearchPage(Some("stalker".to_string())));

        wait_until(|| h.search.get_state().results.is_loaded()).await;

        assert_eq!(h.search.get_state().query.as_deref(), Some("stalker"));
        assert_eq!(h.client.calls(), vec!["search stalker"]);
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(SearchAction::submit("  "));

        assert!(h.search.get_state().results.is_loaded());
        assert!(h.client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_main_page_collections() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::MainPage);

        wait_until(|| h.main_page.get_state().collections.is_loaded()).await;

        assert_eq!(
            h.main_page
                .get_state()
                .collections
                .data()
                .map(|c| c[0].title.clone()),
            Some("Popular".to_string())
        );
    }

    #[tokio::test]
    async fn test_person_page_loads_person() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::PersonPage(9));

        wait_until(|| h.person.get_state().person.is_loaded()).await;

        let state = h.person.get_state();
        assert_eq!(state.person_id, Some(9));
        assert_eq!(
            state.person.data().map(|p| p.name.as_str()),
            Some("Andrei Tarkovsky")
        );
        assert_eq!(h.client.calls(), vec!["fetch_person 9"]);
    }

    #[tokio::test]
    async fn test_genre_page_loads_genre() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::GenrePage(3));

        wait_until(|| h.genre.get_state().page.is_loaded()).await;

        assert_eq!(
            h.genre.get_state().page.data().map(|p| p.genre.id),
            Some(3)
        );
        assert_eq!(h.client.calls(), vec!["fetch_genre 3"]);
    }

    #[tokio::test]
    async fn test_genres_page_loads_all_genres() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::GenresPage);

        wait_until(|| h.genres.get_state().genres.is_loaded()).await;

        assert_eq!(
            h.genres.get_state().genres.data().map(Vec::len),
            Some(1)
        );
        assert_eq!(h.client.calls(), vec!["fetch_genres"]);
    }

    #[tokio::test]
    async fn test_stats_page_loads_stats() {
        let h = harness(FakeClient::new());
        h.dispatcher.dispatch(RenderAction::StatsPage);

        wait_until(|| h.stats.get_state().stats.is_loaded()).await;

        assert_eq!(
            h.stats.get_state().stats.data().map(|s| s.total_votes),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_stats_error_surfaces_code() {
        let h = harness(FakeClient::new().with_stats_reply(Duration::ZERO, Some("unavailable")));
        h.dispatcher.dispatch(RenderAction::StatsPage);

        wait_until(|| h.stats.get_state().stats.error().is_some()).await;

        assert_eq!(h.stats.get_state().stats.error(), Some("unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stats_error_does_not_replace_fresh_stats() {
        let client = FakeClient::new()
            .with_stats_reply(Duration::from_millis(300), Some("timeout"))
            .with_stats_reply(Duration::from_millis(10), None);
        let h = harness(client);

        h.dispatcher.dispatch(RenderAction::StatsPage);
        h.dispatcher.dispatch(RenderAction::StatsPage);

        tokio::time::sleep(Duration::from_millis(500)).await;

        let state = h.stats.get_state();
        assert!(state.stats.is_loaded());
        assert_eq!(h.client.calls(), vec!["fetch_stats", "fetch_stats"]);
    }
}
