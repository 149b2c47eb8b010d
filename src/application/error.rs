//! Application layer error definitions

use thiserror::Error;

/// Application layer error
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Draft store failure
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
