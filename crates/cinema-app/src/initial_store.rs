//! Single slot registry for the mounted page

use std::sync::Mutex;

/// A mounted page of the view layer
pub trait Page: Send {
    /// Draw the page and subscribe it to its stores
    fn render(&mut self);

    /// Unsubscribe and release whatever the page holds
    fn destroy(&mut self);
}

/// Tracks the one page currently mounted
///
/// Only one page exists at a time; the next page is mounted after the
/// previous one has been torn down with [`InitialStore::destroy_stored`].
#[derive(Default)]
pub struct InitialStore {
    stored: Mutex<Option<Box<dyn Page>>>,
}

impl InitialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `page`, replacing (without destroying) any tracked page
    pub fn store(&self, page: Box<dyn Page>) {
        *self.slot() = Some(page);
    }

    /// Destroy the tracked page, if any, and empty the slot
    pub fn destroy_stored(&self) {
        // Take first so destroy() runs without the lock held
        let page = self.slot().take();
        if let Some(mut page) = page {
            page.destroy();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot().is_none()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Box<dyn Page>>> {
        self.stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for InitialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitialStore")
            .field("mounted", &!self.is_empty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPage {
        destroyed: Arc<AtomicUsize>,
    }

    impl Page for CountingPage {
        fn render(&mut self) {}

        fn destroy(&mut self) {
            self.destroyed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn page(destroyed: &Arc<AtomicUsize>) -> Box<dyn Page> {
        Box::new(CountingPage {
            destroyed: destroyed.clone(),
        })
    }

    #[test]
    fn test_destroy_stored_is_idempotent() {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let store = InitialStore::new();
        store.store(page(&destroyed));

        store.destroy_stored();
        store.destroy_stored();

        assert_eq!(destroyed.load(Ordering::SeqCst), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_overwrites_without_destroying() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let store = InitialStore::new();

        store.store(page(&first));
        store.store(page(&second));
        store.destroy_stored();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_destroy_on_empty_slot() {
        let store = InitialStore::new();
        store.destroy_stored();
        assert!(store.is_empty());
    }
}
