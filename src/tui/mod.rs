//! Terminal host: renders the contact page and feeds it crossterm events.

pub mod app;
pub mod env;
pub mod error;
pub mod input;
pub mod palette;
pub mod widgets;

pub use app::{App, Focus};
pub use error::AppError;

use tracing::info;

use crate::config::PageConfig;
use crate::model::Document;
use crate::page::Page;
use crate::storage::JsonFileStore;

/// Loads the contact page against the user's config, store file and
/// terminal environment.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn load_page() -> Result<Page<JsonFileStore>, AppError> {
    let config = PageConfig::load_default()?;
    let store = JsonFileStore::new()?;
    let env = env::detect_environment();
    info!(
        path = %store.path().display(),
        language = ?env.language,
        prefers_dark = env.prefers_dark,
        "loading contact page"
    );
    Ok(Page::load(Document::contact_page(), store, &env, config))
}
