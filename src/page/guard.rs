//! Per-field character counters and the keystroke cap.

use std::time::Duration;

use super::events::{EventBus, Notification};
use super::timers::{Task, Timers};
use crate::model::{
    CountState, CountStatus, Document, FloatingWarning, KeyPress, Locale, Message, Validity,
};

/// Result of the keydown policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyVerdict {
    /// Let the keystroke through.
    Allow,
    /// Suppress it; the field is full and nothing is selected.
    Reject,
}

/// Guards every field that declares a cap and has a counter element.
#[derive(Debug)]
pub struct CharLimitGuard {
    fields: Vec<String>,
    warning_ratio: f64,
    next_warning: u64,
}

impl CharLimitGuard {
    /// Finds the guarded fields and brings their counters up to date.
    ///
    /// Fields without a cap (or with a cap of zero) or without a counter are
    /// left alone.
    pub fn init(doc: &mut Document, bus: &mut EventBus, warning_ratio: f64) -> Self {
        let fields = doc
            .fields
            .iter()
            .filter(|f| f.cap().is_some_and(|max| max > 0) && f.counter.is_some())
            .map(|f| f.name().to_string())
            .collect();
        let guard = Self {
            fields,
            warning_ratio,
            next_warning: 0,
        };
        guard.refresh_all(doc, bus);
        guard
    }

    pub fn guards(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Names of the guarded fields, in page order.
    pub fn guarded_fields(&self) -> &[String] {
        &self.fields
    }

    /// Recomputes one field's counter, styling and validity, then announces
    /// the new count.
    pub fn on_input(&self, doc: &mut Document, bus: &mut EventBus, name: &str) {
        if !self.guards(name) {
            return;
        }
        let Some(field) = doc.field_mut(name) else {
            return;
        };
        let Some(max) = field.cap() else {
            return;
        };
        let state = CountState::compute(field.len(), max, self.warning_ratio);

        if let Some(counter) = field.counter.as_mut() {
            counter.text = state.counter_text();
            counter.status = state.status;
        }
        field.status = state.status;

        if field.is_required() {
            field.validity = if field.is_empty() {
                None
            } else if state.length <= max {
                Some(Validity::Valid)
            } else {
                Some(Validity::Invalid)
            };
        }

        bus.publish(Notification::CharLimitUpdate {
            field: name.to_string(),
            current_length: state.length,
            max_length: max,
            remaining: state.remaining(),
        });
    }

    /// Keydown policy: a full field with no selection rejects every key
    /// except navigation, editing and clipboard shortcuts.
    pub fn on_keydown(&self, doc: &Document, name: &str, key: &KeyPress) -> KeyVerdict {
        if !self.guards(name) || key.always_permitted() {
            return KeyVerdict::Allow;
        }
        let Some(field) = doc.field(name) else {
            return KeyVerdict::Allow;
        };
        match field.cap() {
            Some(max) if field.len() >= max && !field.has_selection() => KeyVerdict::Reject,
            _ => KeyVerdict::Allow,
        }
    }

    /// Defers inspection of a pasted value to the next turn.
    pub fn on_paste(&self, timers: &mut Timers, name: &str) {
        if self.guards(name) {
            timers.schedule(
                Duration::ZERO,
                Task::InspectPaste {
                    field: name.to_string(),
                },
            );
        }
    }

    /// Runs after a paste has landed: cuts an over-cap value down to the cap.
    pub fn inspect_paste(
        &mut self,
        doc: &mut Document,
        bus: &mut EventBus,
        timers: &mut Timers,
        locale: Locale,
        warning: Duration,
        name: &str,
    ) {
        let Some(field) = doc.field_mut(name) else {
            return;
        };
        let Some(max) = field.cap() else {
            return;
        };
        if field.len() <= max {
            return;
        }
        field.truncate_chars(max);
        self.show_warning(doc, timers, locale, warning, name);
        self.on_input(doc, bus, name);
    }

    /// Floats a character-limit notice over the field's group. A second
    /// notice for the same field replaces the first.
    pub fn show_warning(
        &mut self,
        doc: &mut Document,
        timers: &mut Timers,
        locale: Locale,
        duration: Duration,
        name: &str,
    ) {
        doc.warnings.retain(|w| w.field != name);
        let id = self.next_warning;
        self.next_warning += 1;
        doc.warnings.push(FloatingWarning {
            id,
            field: name.to_string(),
            text: locale.message(Message::CharLimitReached).to_string(),
        });
        timers.schedule(duration, Task::DismissWarning { id });
    }

    /// Removes a notice. A notice already replaced is simply gone.
    pub fn dismiss_warning(doc: &mut Document, id: u64) {
        doc.warnings.retain(|w| w.id != id);
    }

    /// Re-renders visible notices in `locale`.
    pub fn relocalize(doc: &mut Document, locale: Locale) {
        let text = locale.message(Message::CharLimitReached);
        for warning in &mut doc.warnings {
            warning.text = text.to_string();
        }
    }

    /// Recomputes every guarded field, e.g. after values were set from code.
    pub fn refresh_all(&self, doc: &mut Document, bus: &mut EventBus) {
        for name in &self.fields {
            self.on_input(doc, bus, name);
        }
    }

    /// Changes a field's cap and recomputes it. A field that has a counter
    /// but was unguarded for lack of a cap becomes guarded, unless the new
    /// cap is zero.
    pub fn set_max_length(&mut self, doc: &mut Document, bus: &mut EventBus, name: &str, max: usize) {
        let Some(field) = doc.field_mut(name) else {
            return;
        };
        field.set_cap(max);
        if max > 0 && field.counter.is_some() && !self.guards(name) {
            self.fields.push(name.to_string());
        }
        self.on_input(doc, bus, name);
    }

    /// Puts every counter back to `0/max` with no status or validity styling.
    /// Field values are expected to be cleared already.
    pub fn reset_counters(&self, doc: &mut Document) {
        for name in &self.fields {
            let Some(field) = doc.field_mut(name) else {
                continue;
            };
            let max = field.cap().unwrap_or_default();
            if let Some(counter) = field.counter.as_mut() {
                counter.text = format!("0/{max}");
                counter.status = CountStatus::Normal;
            }
            field.status = CountStatus::Normal;
            field.validity = None;
        }
    }
}
