use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// The backend could not be reached or refused the call.
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with data that does not have the record shape.
    #[error("malformed catalog response: {0}")]
    Malformed(String),

    #[error("storage error: {0}")]
    Storage(String),
}
