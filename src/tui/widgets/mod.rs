//! Reusable UI widgets.

pub mod form;
pub mod status_bar;

pub use form::draw_form;
pub use status_bar::{StatusBarContext, draw_status_bar};
