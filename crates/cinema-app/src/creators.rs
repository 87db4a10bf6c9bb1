//! Action creators
//!
//! Thin helpers that build one action and hand it to the dispatcher. Views
//! and the router go through these instead of constructing actions inline.

use cinema_client::{GenreId, MovieId, NewReview, PersonId, UserUpdate};
use std::time::Duration;

use crate::actions::{
    AuthAction, CsatAction, MovieAction, NotificationAction, NotificationLevel, Popup,
    PopupAction, RenderAction, SearchAction, UserPageAction,
};
use crate::dispatcher::Dispatcher;

// Pages

pub fn render_main_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::MainPage);
}

pub fn render_navbar(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::Navbar);
}

pub fn render_footer(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::Footer);
}

pub fn render_auth_reg_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::AuthRegPage);
}

pub fn render_movie_page(dispatcher: &Dispatcher, id: MovieId) {
    dispatcher.dispatch(RenderAction::MoviePage(id));
}

pub fn render_person_page(dispatcher: &Dispatcher, id: PersonId) {
    dispatcher.dispatch(RenderAction::PersonPage(id));
}

pub fn render_profile_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::ProfilePage);
}

pub fn render_genre_page(dispatcher: &Dispatcher, id: GenreId) {
    dispatcher.dispatch(RenderAction::GenrePage(id));
}

pub fn render_genres_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::GenresPage);
}

pub fn render_search_page(dispatcher: &Dispatcher, query: Option<String>) {
    dispatcher.dispatch(RenderAction::SearchPage(query));
}

pub fn render_stats_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::StatsPage);
}

pub fn render_csat_page(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::CsatPage);
}

/// Survey prompt fixture, shown on top of whatever page is mounted
pub fn render_csat(dispatcher: &Dispatcher) {
    dispatcher.dispatch(RenderAction::Csat);
}

// Auth

pub fn login(dispatcher: &Dispatcher, username: impl Into<String>, password: impl Into<String>) {
    dispatcher.dispatch(AuthAction::LoginSubmit {
        username: username.into(),
        password: password.into(),
    });
}

pub fn register(
    dispatcher: &Dispatcher,
    username: impl Into<String>,
    password: impl Into<String>,
    repeated_password: impl Into<String>,
) {
    dispatcher.dispatch(AuthAction::RegisterSubmit {
        username: username.into(),
        password: password.into(),
        repeated_password: repeated_password.into(),
    });
}

// Profile

pub fn get_user(dispatcher: &Dispatcher) {
    dispatcher.dispatch(UserPageAction::GetUser);
}

pub fn update_user(dispatcher: &Dispatcher, update: UserUpdate) {
    dispatcher.dispatch(UserPageAction::UpdateUser(update));
}

pub fn update_user_avatar(dispatcher: &Dispatcher, file_name: impl Into<String>, content: Vec<u8>) {
    dispatcher.dispatch(UserPageAction::UpdateUserAvatar {
        file_name: file_name.into(),
        content,
    });
}

pub fn logout(dispatcher: &Dispatcher) {
    dispatcher.dispatch(UserPageAction::LogoutUser);
}

// Movie page

pub fn load_movie_data(dispatcher: &Dispatcher, id: MovieId) {
    dispatcher.dispatch(MovieAction::load_movie(id));
}

pub fn load_movie_reviews(dispatcher: &Dispatcher, id: MovieId) {
    dispatcher.dispatch(MovieAction::load_reviews(id));
}

pub fn post_movie_review(dispatcher: &Dispatcher, movie_id: MovieId, review: NewReview) {
    dispatcher.dispatch(MovieAction::PostMovieReview { movie_id, review });
}

// Search

pub fn search(dispatcher: &Dispatcher, query: impl Into<String>) {
    dispatcher.dispatch(SearchAction::submit(query));
}

// Survey

pub fn submit_csat(dispatcher: &Dispatcher, score: u8) {
    dispatcher.dispatch(CsatAction::Submit(score));
}

pub fn dismiss_csat(dispatcher: &Dispatcher) {
    dispatcher.dispatch(CsatAction::Dismiss);
}

// Popups and notifications

pub fn show_popup(dispatcher: &Dispatcher, popup: Popup) {
    dispatcher.dispatch(PopupAction::Show(popup));
}

pub fn show_info(dispatcher: &Dispatcher, message: impl Into<String>, duration: Duration) {
    show_popup(dispatcher, Popup::info(message, duration));
}

pub fn hide_popup(dispatcher: &Dispatcher) {
    dispatcher.dispatch(PopupAction::Hide { id: None });
}

pub fn notify(dispatcher: &Dispatcher, level: NotificationLevel, message: impl Into<String>) {
    dispatcher.dispatch(NotificationAction::Push {
        level,
        message: message.into(),
    });
}

pub fn dismiss_notification(dispatcher: &Dispatcher, id: u64) {
    dispatcher.dispatch(NotificationAction::Dismiss(id));
}

pub fn clear_notifications(dispatcher: &Dispatcher) {
    dispatcher.dispatch(NotificationAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use std::sync::{Arc, Mutex};

    fn capture(dispatcher: &Dispatcher) -> Arc<Mutex<Vec<Action>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        dispatcher.register(move |action: &Action, _: &Dispatcher| {
            sink.lock().unwrap().push(action.clone());
            Ok(())
        });
        seen
    }

    #[test]
    fn test_creators_dispatch_one_action_each() {
        let dispatcher = Dispatcher::new();
        let seen = capture(&dispatcher);

        render_movie_page(&dispatcher, 42);
        login(&dispatcher, "neo", "matrix1");
        search(&dispatcher, "alien");
        submit_csat(&dispatcher, 5);

        let tags: Vec<&str> = seen.lock().unwrap().iter().map(Action::type_tag).collect();
        assert_eq!(
            tags,
            vec!["RENDER_MOVIE_PAGE", "LOGIN_SUBMIT", "SEARCH_SUBMIT", "CSAT_SUBMIT"]
        );
        assert_eq!(
            seen.lock().unwrap()[0],
            Action::Render(RenderAction::MoviePage(42))
        );
    }

    #[test]
    fn test_creators_do_not_validate_payload() {
        let dispatcher = Dispatcher::new();
        let seen = capture(&dispatcher);

        // Out of range scores still go out; the csat store rejects them
        submit_csat(&dispatcher, 0);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::Csat(CsatAction::Submit(0))]
        );
    }

    #[test]
    fn test_each_load_gets_its_own_request() {
        let dispatcher = Dispatcher::new();
        let seen = capture(&dispatcher);

        load_movie_data(&dispatcher, 7);
        load_movie_data(&dispatcher, 7);

        let requests: Vec<_> = seen
            .lock()
            .unwrap()
            .iter()
            .filter_map(|action| match action {
                Action::Movie(MovieAction::LoadMovieData { movie_id: 7, request }) => {
                    Some(*request)
                }
                _ => None,
            })
            .collect();
        assert_eq!(requests.len(), 2);
        assert_ne!(requests[0], requests[1]);
    }
}
