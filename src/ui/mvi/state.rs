//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated and compared to detect changes.
pub trait UiState: Clone + PartialEq + Send + 'static {}
