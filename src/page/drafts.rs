//! Autosave and restore of form field values.

use tracing::{debug, info};

use super::timers::{Task, TimerId, Timers};
use super::write_store;
use crate::config::PageConfig;
use crate::model::{Banner, Document, Locale, Message};
use crate::storage::{KeyValueStore, draft_key};

/// Mirrors field values into the store and back.
#[derive(Debug)]
pub struct DraftPersistence {
    prefix: String,
    debounce: Option<TimerId>,
    banner: Vec<TimerId>,
}

impl DraftPersistence {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            debounce: None,
            banner: Vec::new(),
        }
    }

    /// Store key for a field's draft.
    pub fn key(&self, field: &str) -> String {
        draft_key(&self.prefix, field)
    }

    /// Writes every field's draft in one pass. Blank (after trimming)
    /// values delete their entry; anything else is stored verbatim.
    pub fn save_all(&self, doc: &Document, store: &mut impl KeyValueStore) {
        for field in &doc.fields {
            let key = self.key(field.name());
            let value = field.value();
            if value.trim().is_empty() {
                write_store(store, &key, None);
            } else {
                write_store(store, &key, Some(value));
            }
        }
        debug!(fields = doc.fields.len(), "drafts saved");
    }

    /// Copies stored drafts into their fields. An empty stored string counts
    /// as no draft.
    ///
    /// Returns the names of the fields that received a value, so the caller
    /// can run their input handling.
    pub fn restore(&self, doc: &mut Document, store: &impl KeyValueStore) -> Vec<String> {
        let mut restored = Vec::new();
        for field in &mut doc.fields {
            let stored = store
                .get(&self.key(field.name()))
                .filter(|value| !value.is_empty());
            if let Some(value) = stored {
                field.set_value(value);
                restored.push(field.name().to_string());
            }
        }
        if !restored.is_empty() {
            debug!(fields = ?restored, "drafts restored");
        }
        restored
    }

    /// Deletes every field's draft.
    pub fn clear_all(&self, doc: &Document, store: &mut impl KeyValueStore) {
        for field in &doc.fields {
            write_store(store, &self.key(field.name()), None);
        }
    }

    /// (Re)starts the quiet-period timer for a coalesced save.
    pub fn schedule_save(&mut self, timers: &mut Timers, config: &PageConfig) {
        if let Some(id) = self.debounce.take() {
            timers.cancel(id);
        }
        self.debounce = Some(timers.schedule(config.debounce(), Task::DebouncedSave));
    }

    /// Runs a pending coalesced save right away.
    pub fn flush(&mut self, doc: &Document, store: &mut impl KeyValueStore, timers: &mut Timers) {
        if let Some(id) = self.debounce.take() {
            timers.cancel(id);
        }
        self.save_all(doc, store);
    }

    /// The debounce timer fired.
    pub fn debounce_elapsed(&mut self, doc: &Document, store: &mut impl KeyValueStore) {
        self.debounce = None;
        self.save_all(doc, store);
    }

    /// Handles a submission: shows the success banner and schedules its exit,
    /// its removal, and the form reset.
    pub fn submit(
        &mut self,
        doc: &mut Document,
        timers: &mut Timers,
        locale: Locale,
        config: &PageConfig,
    ) {
        for id in self.banner.drain(..) {
            timers.cancel(id);
        }
        doc.banner = Some(Banner {
            text: locale.message(Message::SubmitSuccess).to_string(),
            exiting: false,
        });
        self.banner = vec![
            timers.schedule(config.banner_exit_start(), Task::BannerExit),
            timers.schedule(config.banner_duration(), Task::DismissBanner),
        ];
        timers.schedule(config.reset_delay(), Task::ResetForm);
        info!(%locale, "contact form submitted");
    }

    /// Empties every field and deletes every draft.
    pub fn reset_form(&mut self, doc: &mut Document, store: &mut impl KeyValueStore, timers: &mut Timers) {
        if let Some(id) = self.debounce.take() {
            timers.cancel(id);
        }
        for field in &mut doc.fields {
            field.set_value("");
        }
        self.clear_all(doc, store);
    }
}
