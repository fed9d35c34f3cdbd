use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use super::error::StoreError;
use super::record::{from_unix_millis, now_millis, to_unix_millis, CounterAction, CounterRecord};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_FIRST: &str =
    "SELECT id, count, updated_at_ms FROM counters ORDER BY id ASC LIMIT 1";

/// SQLite-backed counter store.
///
/// Every operation targets the first row by ascending id. Extra rows are
/// left untouched.
#[derive(Debug)]
pub struct SqliteCounterStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteCounterStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&path)?;
        let store = Self {
            conn,
            path: Some(path),
        };
        store.migrate()?;
        Ok(store)
    }

    /// Private in-memory database, gone when the store is dropped.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.migrate()?;
        Ok(store)
    }

    /// Database file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.busy_timeout(BUSY_TIMEOUT)?;
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS counters (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              count INTEGER NOT NULL DEFAULT 0,
              updated_at_ms INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Return the active record, creating it with `count = 0` if the table
    /// is empty.
    ///
    /// Runs under an immediate transaction so racing first callers on the
    /// same file create a single row.
    pub fn ensure_record_exists(&mut self) -> Result<CounterRecord, StoreError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let record = ensure_in(&tx)?;
        tx.commit()?;
        Ok(record)
    }

    pub fn read(&mut self) -> Result<CounterRecord, StoreError> {
        self.ensure_record_exists()
    }

    /// Apply `action` to the active record and persist the result together
    /// with a fresh timestamp.
    pub fn apply(&mut self, action: CounterAction) -> Result<CounterRecord, StoreError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let current = ensure_in(&tx)?;
        let next = current.with_action(action, now_millis());
        tx.execute(
            "UPDATE counters SET count = ?1, updated_at_ms = ?2 WHERE id = ?3",
            params![next.count, to_unix_millis(next.updated_at), next.id],
        )?;
        tx.commit()?;

        tracing::debug!(
            id = next.id,
            action = %action,
            from = current.count,
            to = next.count,
            "counter updated"
        );
        Ok(next)
    }

    /// Append a row with the given count. Used for seeding.
    pub fn insert_record(&mut self, count: i64) -> Result<CounterRecord, StoreError> {
        let updated_at = now_millis();
        self.conn.execute(
            "INSERT INTO counters (count, updated_at_ms) VALUES (?1, ?2)",
            params![count, to_unix_millis(updated_at)],
        )?;
        Ok(CounterRecord {
            id: self.conn.last_insert_rowid(),
            count,
            updated_at,
        })
    }

    /// All rows in id order.
    pub fn records(&self) -> Result<Vec<CounterRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, count, updated_at_ms FROM counters ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_row)?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

fn ensure_in(conn: &Connection) -> Result<CounterRecord, StoreError> {
    if let Some(record) = first_record(conn)? {
        return Ok(record);
    }

    let now = now_millis();
    conn.execute(
        "INSERT INTO counters (count, updated_at_ms) VALUES (0, ?1)",
        params![to_unix_millis(now)],
    )?;
    tracing::info!("created counter record");

    first_record(conn)?.ok_or(StoreError::MissingRecord)
}

fn first_record(conn: &Connection) -> Result<Option<CounterRecord>, StoreError> {
    let record = conn.query_row(SELECT_FIRST, [], map_row).optional()?;
    Ok(record)
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<CounterRecord> {
    Ok(CounterRecord {
        id: row.get(0)?,
        count: row.get(1)?,
        updated_at: from_unix_millis(row.get(2)?),
    })
}
