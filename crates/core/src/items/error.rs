use thiserror::Error;

/// Errors that can occur when validating an item request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name too long (max 200 characters)")]
    NameTooLong,
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Item description too long (max 2000 characters)")]
    DescriptionTooLong,
}
