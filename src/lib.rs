#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Contact page behaviours for a personal portfolio site.
//!
//! - [`page::CharLimitGuard`]: per-field counters and the keystroke cap.
//! - [`page::ThemeSwitcher`]: light/dark theme, remembered across sessions.
//! - [`page::DraftPersistence`]: form autosave and restore.
//! - [`page::LocaleSwitcher`]: English/Filipino text swapping.
//!
//! [`page::Page`] runs all four against an in-memory [`model::Document`] and
//! an injected [`storage::KeyValueStore`]. The `tui` module hosts the page in
//! a terminal.

pub mod config;
pub mod model;
pub mod page;
pub mod storage;
pub mod tui;
