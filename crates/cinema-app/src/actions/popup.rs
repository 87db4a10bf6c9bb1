//! Popup actions
//!
//! A popup is a short lived message that hides itself after its duration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use strum::IntoStaticStr;

static NEXT_POPUP_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Unique per popup; used to tell an auto-hide for this popup apart from
    /// one left over from a popup it replaced
    pub id: u64,
    pub kind: PopupKind,
    pub message: String,
    pub duration: Duration,
}

impl Popup {
    pub fn new(kind: PopupKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: NEXT_POPUP_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
            duration,
        }
    }

    pub fn info(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(PopupKind::Info, message, duration)
    }

    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(PopupKind::Success, message, duration)
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(PopupKind::Error, message, duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum PopupAction {
    #[strum(serialize = "SHOW_POPUP")]
    Show(Popup),
    /// Hide the popup; `Some(id)` only hides that specific popup
    #[strum(serialize = "HIDE_POPUP")]
    Hide { id: Option<u64> },
}
