use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input rejected before it reaches the repository.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Nothing to update")]
    EmptyPatch,
}

impl StorefrontError {
    /// Not-found and validation failures are reported to the user, not treated as crashes.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_and_is_user_facing() {
        let err: StorefrontError = ValidationError::Missing("image").into();
        assert!(err.is_user_facing());
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required field: image"
        );
    }

    #[test]
    fn test_storage_errors_are_not_user_facing() {
        let err: StorefrontError = StorageError::Backend("boom".to_string()).into();
        assert!(!err.is_user_facing());
    }
}
