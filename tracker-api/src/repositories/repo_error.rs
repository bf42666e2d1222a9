use thiserror::Error;
use tracker_core::domain::TrackerError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<RepositoryError> for TrackerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                TrackerError::storage(err.to_string())
            }
        }
    }
}
