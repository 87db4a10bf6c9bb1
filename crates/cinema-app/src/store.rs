//! Store - one slice of application state plus its listeners
//!
//! A store owns a private state value, reduces it in response to actions
//! delivered by the [`Dispatcher`], and notifies its listeners whenever the
//! reducer reports a change. Nothing outside the store mutates its state.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// Handle returned by [`Store::subscribe`]
pub type ListenerId = u64;

/// View side callback invoked with the new state
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// State owned by a store
pub trait StoreState: Clone + Default + Send + Sync + 'static {
    /// Store name for logging
    const NAME: &'static str;

    /// Apply an action to the state
    ///
    /// Returns `true` when the state changed and listeners should be told.
    /// Actions the store does not care about return `false`.
    fn reduce(&mut self, action: &Action) -> bool;
}

pub struct Store<S: StoreState> {
    state: RwLock<S>,
    listeners: Mutex<Vec<(ListenerId, Listener<S>)>>,
    next_listener: AtomicU64,
}

impl<S: StoreState> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: StoreState> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(1),
        }
    }

    /// Register this store's handler with the dispatcher
    pub fn attach(self: &Arc<Self>, dispatcher: &Dispatcher) {
        let store = Arc::clone(self);
        dispatcher.register(move |action, _| {
            store.handle_action(action);
            Ok(())
        });
    }

    /// Snapshot of the current state
    ///
    /// A copy, so holders never see the store change under them and can't
    /// change it themselves.
    pub fn get_state(&self) -> S {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; unknown ids are ignored
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners().retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Dispatcher entry point
    pub fn handle_action(&self, action: &Action) {
        let changed = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state.reduce(action)
        };

        if changed {
            log::trace!("{}: state changed on {}", S::NAME, action.type_tag());
            self.emit_change();
        }
    }

    /// Notify every listener with the current state
    pub fn emit_change(&self) {
        let state = self.get_state();
        let listeners: Vec<Listener<S>> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&state);
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(ListenerId, Listener<S>)>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: StoreState + std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(S::NAME)
            .field("state", &self.get_state())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
