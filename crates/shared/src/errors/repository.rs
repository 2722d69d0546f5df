use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    /// The backing store cannot serve the request right now.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Custom: {0}")]
    Custom(String),
}
