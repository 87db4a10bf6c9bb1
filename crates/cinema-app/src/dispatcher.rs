//! Dispatcher - the single direction event bus
//!
//! Every action flows through one `Dispatcher`. Registered callbacks (stores,
//! the page host, middleware) receive each action in registration order,
//! synchronously, on the thread that called [`Dispatcher::dispatch`].
//!
//! Two rules keep the bus predictable:
//! - A callback that fails is logged and the remaining callbacks still run.
//! - An action dispatched while a round is in progress (from inside a
//!   callback, or from a tokio task finishing a request) is queued and
//!   delivered after the current round by the thread that owns the round.
//!   Nested dispatch never recurses.

use crate::actions::Action;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Callback registered with the dispatcher
///
/// Receives the action and the dispatcher itself, so follow-up actions can be
/// dispatched without the callback owning a dispatcher handle.
pub type Callback = Arc<dyn Fn(&Action, &Dispatcher) -> anyhow::Result<()> + Send + Sync>;

#[derive(Default)]
struct Queue {
    pending: VecDeque<Action>,
    /// A thread is currently delivering actions
    busy: bool,
}

#[derive(Default)]
struct Inner {
    callbacks: Mutex<Vec<Callback>>,
    queue: Mutex<Queue>,
}

/// Central action dispatcher
///
/// Cheap to clone; all clones share the same callbacks and queue. One
/// instance is created at bootstrap and handed to everything that needs it.
#[derive(Clone, Default)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

/// Clears the busy flag if a callback panics mid-round
struct RoundGuard<'a> {
    inner: &'a Inner,
    armed: bool,
}

impl Drop for RoundGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(&self.inner.queue).busy = false;
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback; duplicates are not detected
    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&Action, &Dispatcher) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        lock(&self.inner.callbacks).push(Arc::new(callback));
    }

    /// Number of registered callbacks
    pub fn callback_count(&self) -> usize {
        lock(&self.inner.callbacks).len()
    }

    /// Deliver an action to every registered callback
    ///
    /// Returns once the action (and anything queued while delivering it)
    /// has been handled, unless another thread is already delivering, in
    /// which case the action is queued for that thread.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        {
            let mut queue = lock(&self.inner.queue);
            queue.pending.push_back(action);
            if queue.busy {
                log::trace!("Dispatch in progress, queued action");
                return;
            }
            queue.busy = true;
        }

        let mut guard = RoundGuard {
            inner: &self.inner,
            armed: true,
        };
        loop {
            // Popping and releasing the round happen under one lock, so an
            // action queued by another thread is never left behind
            let action = {
                let mut queue = lock(&self.inner.queue);
                match queue.pending.pop_front() {
                    Some(action) => action,
                    None => {
                        queue.busy = false;
                        guard.armed = false;
                        break;
                    }
                }
            };
            self.deliver(&action);
        }
    }

    fn deliver(&self, action: &Action) {
        // Snapshot so callbacks may register others without deadlocking
        let callbacks: Vec<Callback> = lock(&self.inner.callbacks).clone();
        for (index, callback) in callbacks.iter().enumerate() {
            if let Err(e) = callback(action, self) {
                log::error!(
                    "Dispatcher: handler #{} failed on {}: {:#}",
                    index,
                    action.type_tag(),
                    e
                );
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("callbacks", &self.callback_count())
            .finish()
    }
}
