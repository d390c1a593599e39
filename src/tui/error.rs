use crate::config::ConfigError;
use crate::storage::StoreError;

/// Errors that can occur in the terminal host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The draft store could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The config file could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
