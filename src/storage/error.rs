/// Errors that can occur while reading or writing the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file is not a flat JSON object of strings.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}
