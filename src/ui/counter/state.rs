use crate::store::{CounterAction, CounterRecord};
use crate::ui::mvi::UiState;

/// Counter view state machine.
///
/// `Online` may degrade to `Offline`; nothing leads back. A fresh view
/// (remount) starts again at `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterViewState {
    /// First read not resolved yet. Nothing but a loading screen is shown.
    Loading { mirror: CounterRecord },
    /// Store reachable; actions go to the server.
    Online {
        mirror: CounterRecord,
        pending: Option<CounterAction>,
    },
    /// Store unreachable for the rest of the session; actions are applied
    /// to the mirror only.
    Offline {
        mirror: CounterRecord,
        pending: Option<CounterAction>,
    },
}

impl UiState for CounterViewState {}

impl CounterViewState {
    pub fn loading(mirror: CounterRecord) -> Self {
        Self::Loading { mirror }
    }

    pub fn mirror(&self) -> &CounterRecord {
        match self {
            Self::Loading { mirror } | Self::Online { mirror, .. } | Self::Offline { mirror, .. } => {
                mirror
            }
        }
    }

    pub fn pending(&self) -> Option<CounterAction> {
        match self {
            Self::Loading { .. } => None,
            Self::Online { pending, .. } | Self::Offline { pending, .. } => *pending,
        }
    }

    pub fn has_loaded(&self) -> bool {
        !matches!(self, Self::Loading { .. })
    }

    pub fn store_reachable(&self) -> bool {
        matches!(self, Self::Online { .. })
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Whether action controls accept input.
    pub fn accepts_actions(&self) -> bool {
        self.has_loaded() && !self.is_pending()
    }

    /// Whether the persistent offline advisory is shown.
    pub fn show_offline_notice(&self) -> bool {
        matches!(self, Self::Offline { .. })
    }
}
