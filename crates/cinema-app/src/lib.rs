//! Cinema catalog client core
//!
//! A unidirectional data flow core for the movie catalog frontend:
//!
//! ```text
//!  router / view ──► creators ──► Dispatcher ──► stores ──► listeners (pages)
//!                                    │
//!                                    └──► middleware ──► CatalogClient (tokio)
//!                                              │
//!                                              └──► follow-up actions
//! ```
//!
//! Rendering itself is left to the host through [`page_host::PageFactory`]
//! and the [`initial_store::Page`] trait.

pub mod actions;
pub mod app;
pub mod creators;
pub mod dispatcher;
pub mod initial_store;
pub mod loadable;
pub mod logger;
pub mod middleware;
pub mod page_host;
pub mod router;
pub mod store;
pub mod stores;

#[cfg(test)]
mod test_support;

pub use actions::Action;
pub use app::{App, AppDeps, Stores};
pub use dispatcher::Dispatcher;
pub use loadable::{Loadable, RequestId};
pub use store::{Store, StoreState};
