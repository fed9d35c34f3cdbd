//! Persisted counter storage.
//!
//! A single SQLite table holds counter rows; the store only ever reads and
//! writes the first one, creating it on demand.

mod error;
mod record;
mod shared;
mod sqlite;

pub use error::StoreError;
pub use record::{now_millis, CounterAction, CounterRecord, UnknownAction};
pub use shared::SharedStore;
pub use sqlite::SqliteCounterStore;
