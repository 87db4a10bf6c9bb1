//! Popup auto-hide timer
//!
//! Each `SHOW_POPUP` starts a timer that hides that popup after its
//! duration. Showing another popup, or hiding the current one, cancels the
//! pending timer, so at most one timer is alive.

use std::sync::{Mutex, MutexGuard};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::actions::{Action, PopupAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;

struct PendingHide {
    popup_id: u64,
    task: JoinHandle<()>,
}

pub struct PopupTimerMiddleware {
    runtime: Handle,
    pending: Mutex<Option<PendingHide>>,
}

impl PopupTimerMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Mutex::new(None),
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<PendingHide>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cancel(pending: &mut Option<PendingHide>) {
        if let Some(previous) = pending.take() {
            log::trace!("PopupTimer: cancelling hide of popup {}", previous.popup_id);
            previous.task.abort();
        }
    }
}

impl Middleware for PopupTimerMiddleware {
    fn handle(&self, action: &Action, dispatcher: &Dispatcher) -> anyhow::Result<()> {
        match action {
            Action::Popup(PopupAction::Show(popup)) => {
                let mut pending = self.pending();
                Self::cancel(&mut pending);

                let popup_id = popup.id;
                let duration = popup.duration;
                let dispatcher = dispatcher.clone();
                let task = self.runtime.spawn(async move {
                    tokio::time::sleep(duration).await;
                    dispatcher.dispatch(PopupAction::Hide { id: Some(popup_id) });
                });
                *pending = Some(PendingHide { popup_id, task });
            }
            Action::Popup(PopupAction::Hide { id }) => {
                let mut pending = self.pending();
                let matches = match (id, pending.as_ref()) {
                    (None, _) => true,
                    (Some(id), Some(current)) => current.popup_id == *id,
                    (Some(_), None) => false,
                };
                if matches {
                    Self::cancel(&mut pending);
                }
            }
            _ => {}
        }
        Ok(())
    }
}
