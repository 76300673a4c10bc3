//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses, paste) and system events
/// (request completion, timer ticks). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
