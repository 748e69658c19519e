//! A cloneable handle to one catalog store shared between consumers.
//!
//! The lock is only held for the synchronous steps of a load, never across
//! the fetch. A second load requested while one is in flight therefore sees
//! the store in the loading state and is rejected with
//! [`StoreError::LoadInProgress`] instead of racing the first one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use shalom_data::TableSource;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::store::{CatalogStore, LoadReport};

#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogStore>>,
    /// Set when a dropped load could not take the lock to leave the
    /// loading state. Whoever takes the write lock next finishes the job.
    abandoned: Arc<AtomicBool>,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
            abandoned: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read access for views and queries.
    pub async fn read(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.inner.read().await
    }

    /// Write access for filter and cursor actions.
    pub async fn write(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        let mut store = self.inner.write().await;
        clear_abandoned(&self.abandoned, &mut store);
        store
    }

    /// Run the load pipeline against the shared store.
    pub async fn load<S: TableSource>(&self, source: &S) -> Result<LoadReport, StoreError> {
        self.write().await.begin_load()?;
        log::debug!("Loading archive table from {}", source.describe());

        let pending = self.pending_load();
        let fetched = source.fetch_table().await;

        let mut store = self.inner.write().await;
        pending.disarm();
        store.finish_load(fetched)
    }

    fn pending_load(&self) -> PendingLoad {
        PendingLoad {
            target: Some((Arc::clone(&self.inner), Arc::clone(&self.abandoned))),
        }
    }
}

fn clear_abandoned(abandoned: &AtomicBool, store: &mut CatalogStore) {
    if abandoned.swap(false, Ordering::AcqRel) {
        store.cancel_load();
    }
}

/// Leaves the loading state if a load is dropped before it finishes.
struct PendingLoad {
    target: Option<(Arc<RwLock<CatalogStore>>, Arc<AtomicBool>)>,
}

impl PendingLoad {
    fn disarm(mut self) {
        self.target = None;
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        let Some((store, abandoned)) = self.target.take() else {
            return;
        };
        if let Ok(mut guard) = store.try_write() {
            guard.cancel_load();
            return;
        }
        // The lock is busy. Mark the load abandoned so the next writer clears
        // it, and clear it ourselves once the lock frees up if a runtime is
        // around. Only one of the two acts on the marker.
        abandoned.store(true, Ordering::Release);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let mut guard = store.write().await;
                    clear_abandoned(&abandoned, &mut guard);
                });
            }
            Err(_) => log::debug!("Abandoned catalog load will be cleared by the next writer"),
        }
    }
}
