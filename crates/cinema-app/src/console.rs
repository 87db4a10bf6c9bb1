//! Console front end for the driver binary
//!
//! Pages print a summary of their store whenever it changes; commands are
//! read line by line from stdin.

use cinema_app::actions::PopupKind;
use cinema_app::initial_store::Page;
use cinema_app::page_host::{PageFactory, PageKind};
use cinema_app::store::ListenerId;
use cinema_app::stores::{AuthStatus, CsatStatus};
use cinema_app::{Loadable, Store, StoreState, Stores};
use std::sync::Arc;
use thiserror::Error;

type Summary<S> = fn(&S) -> Option<String>;

/// A page bound to a single store
struct StorePage<S: StoreState> {
    title: String,
    store: Arc<Store<S>>,
    summarize: Summary<S>,
    listener: Option<ListenerId>,
}

impl<S: StoreState> StorePage<S> {
    fn boxed(title: impl Into<String>, store: &Arc<Store<S>>, summarize: Summary<S>) -> Box<dyn Page> {
        Box::new(Self {
            title: title.into(),
            store: Arc::clone(store),
            summarize,
            listener: None,
        })
    }
}

impl<S: StoreState> Page for StorePage<S> {
    fn render(&mut self) {
        println!("== {} ==", self.title);
        let summarize = self.summarize;
        if let Some(line) = summarize(&self.store.get_state()) {
            println!("{}", line);
        }
        let title = self.title.clone();
        self.listener = Some(self.store.subscribe(move |state: &S| {
            if let Some(line) = summarize(state) {
                println!("[{}] {}", title, line);
            }
        }));
    }

    fn destroy(&mut self) {
        if let Some(id) = self.listener.take() {
            self.store.unsubscribe(id);
        }
    }
}

fn describe<T>(loadable: &Loadable<T>, loaded: impl Fn(&T) -> String) -> Option<String> {
    match loadable {
        Loadable::Idle => None,
        Loadable::Loading => Some("loading...".to_string()),
        Loadable::Loaded(data) => Some(loaded(data)),
        Loadable::Failed(error) => Some(format!("error: {}", error)),
    }
}

pub struct ConsolePages {
    stores: Stores,
}

impl ConsolePages {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }
}

impl PageFactory for ConsolePages {
    fn create(&self, kind: &PageKind) -> Box<dyn Page> {
        let s = &self.stores;
        match kind {
            PageKind::Main => StorePage::boxed("Main", &s.main_page, |state| {
                describe(&state.collections, |collections| {
                    collections
                        .iter()
                        .map(|c| format!("{} ({} movies)", c.title, c.movies.len()))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
            }),
            PageKind::Auth => StorePage::boxed("Sign in", &s.auth, |state| match &state.status {
                AuthStatus::Anonymous => None,
                AuthStatus::Submitting => Some("signing in...".to_string()),
                AuthStatus::Authenticated(user) => Some(format!("signed in as {}", user.username)),
                AuthStatus::Failed(error) => Some(format!("error: {}", error)),
            }),
            PageKind::Movie(id) => StorePage::boxed(format!("Movie {}", id), &s.movie_page, |state| {
                let movie = describe(&state.movie, |m| match m.year {
                    Some(year) => format!("{} ({})", m.title, year),
                    None => m.title.clone(),
                });
                let reviews = describe(&state.reviews, |r| format!("{} reviews", r.len()));
                match (movie, reviews) {
                    (None, None) => None,
                    (movie, reviews) => Some(format!(
                        "{} | {}{}",
                        movie.unwrap_or_default(),
                        reviews.unwrap_or_default(),
                        if state.review_posting { " | posting review" } else { "" }
                    )),
                }
            }),
            PageKind::Person(id) => StorePage::boxed(format!("Person {}", id), &s.person, |state| {
                describe(&state.person, |p| {
                    format!("{} - {} ({} movies)", p.name, p.career.join(", "), p.movies.len())
                })
            }),
            PageKind::Profile => StorePage::boxed("Profile", &s.user_page, |state| {
                describe(&state.profile, |u| {
                    format!("{} <{}>", u.username, u.email.as_deref().unwrap_or("no email"))
                })
            }),
            PageKind::Genre(id) => StorePage::boxed(format!("Genre {}", id), &s.genre, |state| {
                describe(&state.page, |p| format!("{}: {} movies", p.genre.name, p.movies.len()))
            }),
            PageKind::Genres => StorePage::boxed("Genres", &s.genres, |state| {
                describe(&state.genres, |genres| {
                    genres
                        .iter()
                        .map(|g| format!("{} (/genre/{})", g.name, g.id))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
            }),
            PageKind::Search => StorePage::boxed("Search", &s.search, |state| {
                describe(&state.results, |r| {
                    format!("{} movies, {} persons", r.movies.len(), r.persons.len())
                })
            }),
            PageKind::Stats => StorePage::boxed("Stats", &s.stats, |state| {
                describe(&state.stats, |st| {
                    format!("average {:.2} from {} votes", st.average_score, st.total_votes)
                })
            }),
            PageKind::Csat => StorePage::boxed("Survey", &s.csat, |state| match &state.status {
                CsatStatus::Idle => Some("rate us from 1 to 5 with `csat <score>`".to_string()),
                CsatStatus::Submitting(score) => Some(format!("sending {}...", score)),
                CsatStatus::Submitted(score) => Some(format!("thanks for the {}", score)),
                CsatStatus::Failed(error) => Some(format!("error: {}", error)),
            }),
        }
    }
}

/// Print popups and notifications as they appear
pub fn watch_fixtures(stores: &Stores) {
    stores.popup.subscribe(|state| {
        if let Some(popup) = &state.current {
            let marker = match popup.kind {
                PopupKind::Info => "i",
                PopupKind::Success => "+",
                PopupKind::Error => "!",
            };
            println!("({}) {}", marker, popup.message);
        }
    });
    stores.notification.subscribe(|state| {
        if let Some(last) = state.items.last() {
            println!("[{:?}] #{} {}", last.level, last.id, last.message);
        }
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Back,
    Search(String),
    Login { username: String, password: String },
    Register { username: String, password: String, repeated_password: String },
    Logout,
    Review { text: String, rating: Option<u8> },
    Avatar(String),
    Csat(u8),
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  go <path>                       navigate (/, /movie/42, /name/7, /genres, ...)
  back                            previous history entry
  search <query>                  search movies and persons
  login <user> <password>
  register <user> <password> <password>
  logout
  review <text> [rating]          review the open movie
  avatar <file>                   upload a profile picture
  csat <score>                    rate the service from 1 to 5
  state                           dump store state
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match (name, args.as_slice()) {
            ("go", [path]) => Self::Go(path.to_string()),
            ("go", _) => return Err(CommandError::Usage("go <path>")),
            ("back", []) => Self::Back,
            ("search", _) if !rest.is_empty() => Self::Search(rest.to_string()),
            ("search", _) => return Err(CommandError::Usage("search <query>")),
            ("login", [username, password]) => Self::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            ("login", _) => return Err(CommandError::Usage("login <user> <password>")),
            ("register", [username, password, repeated]) => Self::Register {
                username: username.to_string(),
                password: password.to_string(),
                repeated_password: repeated.to_string(),
            },
            ("register", _) => {
                return Err(CommandError::Usage("register <user> <password> <password>"));
            }
            ("logout", []) => Self::Logout,
            ("review", [.., last]) => {
                let (text, rating) = match last.parse::<u8>() {
                    Ok(rating) if args.len() > 1 => {
                        let text = rest[..rest.len() - last.len()].trim_end();
                        (text.to_string(), Some(rating))
                    }
                    _ => (rest.to_string(), None),
                };
                Self::Review { text, rating }
            }
            ("review", []) => return Err(CommandError::Usage("review <text> [rating]")),
            ("avatar", [file]) => Self::Avatar(file.to_string()),
            ("avatar", _) => return Err(CommandError::Usage("avatar <file>")),
            ("csat", [score]) => match score.parse() {
                Ok(score) => Self::Csat(score),
                Err(_) => return Err(CommandError::Usage("csat <score>")),
            },
            ("csat", _) => return Err(CommandError::Usage("csat <score>")),
            ("state", []) => Self::State,
            ("help", _) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}
