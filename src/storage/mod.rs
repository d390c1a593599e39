//! Persistent key-value storage for page state.
//!
//! Values are flat strings under literal keys: [`THEME_KEY`],
//! [`LANGUAGE_KEY`], and one draft key per form field (see [`draft_key`]).
//! An absent key means "use the default".

mod error;
mod file;
mod memory;

use std::fs;
use std::path::PathBuf;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key holding the explicitly chosen theme.
pub const THEME_KEY: &str = "theme";
/// Key holding the explicitly chosen locale.
pub const LANGUAGE_KEY: &str = "language";
/// Default prefix for per-field draft keys.
pub const DEFAULT_DRAFT_PREFIX: &str = "portfolio_form_";

/// Builds the draft key for a field, e.g. `portfolio_form_email`.
pub fn draft_key(prefix: &str, field: &str) -> String {
    format!("{prefix}{field}")
}

/// String key-value storage that survives page reloads.
///
/// Reads never fail: an unreadable entry is an absent entry. Writes report
/// errors so callers can log them.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Returns (and creates) the application's XDG data directory,
/// e.g. `~/.local/share/folio-contact/`.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = dirs::data_dir()
        .ok_or(StoreError::NoDataDir)?
        .join("folio-contact");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
