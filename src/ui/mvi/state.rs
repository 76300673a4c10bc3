//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to create new states, hold everything the view needs,
/// and compare with `PartialEq` so tests can assert on whole snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
