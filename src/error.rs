//! Error types for index operations.

use thiserror::Error;

/// Errors surfaced by [`crate::Index`] operations.
///
/// Note that a location that does not resolve is NOT an error; it is the
/// [`crate::Lookup::NotFound`] outcome. Malformed ingestion lines are skipped
/// silently and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    /// Search was called with an empty or whitespace-only location.
    #[error("location must not be blank")]
    BlankLocation,
}
