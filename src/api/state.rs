//! Application state for the payroll web UI.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::export::Notice;
use crate::storage::PayrollStorage;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Holds the payroll store and the notices waiting to be shown on the next
/// page render. Each request locks the store for the whole operation.
pub struct AppState<S: PayrollStorage> {
    store: Arc<Mutex<PayrollStore<S>>>,
    notices: Arc<Mutex<Vec<Notice>>>,
}

// Derived Clone would require S: Clone.
impl<S: PayrollStorage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notices: Arc::clone(&self.notices),
        }
    }
}

impl<S: PayrollStorage> AppState<S> {
    /// Creates a new application state around the given store.
    pub fn new(store: PayrollStore<S>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            notices: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Locks and returns the payroll store.
    pub async fn store(&self) -> MutexGuard<'_, PayrollStore<S>> {
        self.store.lock().await
    }

    /// Queues a notice for the next page render.
    pub async fn push_notice(&self, notice: Notice) {
        self.notices.lock().await.push(notice);
    }

    /// Removes and returns all queued notices.
    pub async fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().await)
    }
}
