//! Status codes for repository failures.

use super::RepositoryError;

/// HTTP status code reported to callers for a [`RepositoryError`].
///
/// Missing keys are 404 and duplicate attachment ids 409. An unreachable
/// store is 503 and a failing object store 502. Failed queries and stored
/// rows that no longer decode are server faults, so both are 500.
///
/// ```
/// use memories_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::item_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::ObjectStore(_) => 502,
        RepositoryError::QueryFailed(_) | RepositoryError::InvalidData(_) => 500,
    }
}
