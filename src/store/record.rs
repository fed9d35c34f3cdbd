use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The single persisted counter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub id: i64,
    pub count: i64,
    /// Last mutation time. Written by the store on the remote path and by
    /// the client clock on the local path.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl CounterRecord {
    /// Id the client assumes before it has heard from the store.
    pub const PLACEHOLDER_ID: i64 = 1;

    /// Mirror used before the first read completes.
    pub fn placeholder(at: OffsetDateTime) -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            count: 0,
            updated_at: at,
        }
    }

    /// Returns a copy with `action` applied to the count and a new timestamp.
    /// The id is kept.
    pub fn with_action(&self, action: CounterAction, at: OffsetDateTime) -> Self {
        Self {
            id: self.id,
            count: action.apply_to(self.count),
            updated_at: at,
        }
    }
}

/// User-facing mutation of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub const ALL: [CounterAction; 3] = [
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Reset,
    ];

    /// Per-action arithmetic shared by the store and the offline path.
    ///
    /// `Reset` is absolute. The count saturates at the `i64` bounds.
    pub fn apply_to(self, count: i64) -> i64 {
        match self {
            CounterAction::Increment => count.saturating_add(1),
            CounterAction::Decrement => count.saturating_sub(1),
            CounterAction::Reset => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown action '{}' (expected increment, decrement or reset)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for CounterAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CounterAction::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Current UTC time truncated to the millisecond precision the store keeps.
pub fn now_millis() -> OffsetDateTime {
    from_unix_millis(to_unix_millis(OffsetDateTime::now_utc()))
}

pub(crate) fn to_unix_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

pub(crate) fn from_unix_millis(ms: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
