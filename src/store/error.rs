use thiserror::Error;

/// Failures surfaced by the counter store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The blocking task running the store call panicked or was cancelled.
    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The row vanished between creation and read-back.
    #[error("counter record missing after ensure")]
    MissingRecord,
}
