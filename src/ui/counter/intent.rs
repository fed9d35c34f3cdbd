use time::OffsetDateTime;

use crate::store::{CounterAction, CounterRecord};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Initial read returned a record.
    Loaded(CounterRecord),
    /// Initial read failed. The placeholder mirror is kept.
    LoadFailed,
    /// User pressed an action control.
    Begin(CounterAction),
    /// Server applied the pending action and returned the new record.
    Applied(CounterRecord),
    /// Server call for the pending action failed; apply it locally at `at`.
    ApplyFailed { at: OffsetDateTime },
    /// Offline: the pending action was applied to the mirror at `at`.
    AppliedLocally { at: OffsetDateTime },
}

impl Intent for CounterIntent {}
