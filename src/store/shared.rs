use std::sync::Arc;

use parking_lot::Mutex;

use super::error::StoreError;
use super::record::{CounterAction, CounterRecord};
use super::sqlite::SqliteCounterStore;

/// Cloneable async handle to a [`SqliteCounterStore`].
///
/// Calls take the lock and run on the blocking pool, so concurrent RPC
/// handlers are serialized against the single connection.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<SqliteCounterStore>>,
}

impl SharedStore {
    pub fn new(store: SqliteCounterStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn read(&self) -> Result<CounterRecord, StoreError> {
        self.run(|store| store.read()).await
    }

    pub async fn apply(&self, action: CounterAction) -> Result<CounterRecord, StoreError> {
        self.run(move |store| store.apply(action)).await
    }

    /// Synchronous access for seeding and inspection outside the runtime.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut SqliteCounterStore) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteCounterStore) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock();
            f(&mut *guard)
        })
        .await?
    }
}
