//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Outcomes of remote calls (record received, call failed)
///
/// Anything time-dependent is carried inside the intent so reducers stay pure.
pub trait Intent: Send + 'static {}
