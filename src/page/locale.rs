use std::time::Duration;

use tracing::debug;

use super::events::{EventBus, Notification};
use super::timers::{Task, TimerId, Timers};
use super::write_store;
use crate::model::{Document, Key, KeyPress, Locale, TextFade};
use crate::storage::{KeyValueStore, LANGUAGE_KEY};

/// Owns the current locale and rewrites the page's text when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSwitcher {
    current: Locale,
    press: Option<TimerId>,
    fade: Vec<TimerId>,
}

impl LocaleSwitcher {
    /// Picks the starting locale and applies it.
    ///
    /// A stored `language` wins; otherwise the environment's language tag is
    /// consulted. The result is applied and announced but not persisted, so
    /// only an explicit selection is remembered.
    pub fn init(
        doc: &mut Document,
        store: &impl KeyValueStore,
        language_tag: Option<&str>,
        bus: &mut EventBus,
    ) -> Self {
        let locale = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_else(|| Locale::detect(language_tag));
        let mut switcher = Self {
            current: locale,
            press: None,
            fade: Vec::new(),
        };
        switcher.apply(doc, locale);
        bus.publish(Notification::LanguageChanged { locale });
        switcher
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    /// Persists, applies and announces `locale`.
    ///
    /// Re-selecting the active locale still persists and announces.
    pub fn set_locale(
        &mut self,
        doc: &mut Document,
        store: &mut impl KeyValueStore,
        bus: &mut EventBus,
        locale: Locale,
    ) {
        write_store(store, LANGUAGE_KEY, Some(locale.code()));
        self.apply(doc, locale);
        debug!(%locale, "locale set");
        bus.publish(Notification::LanguageChanged { locale });
    }

    /// A choice made in the language selector: sets the locale and plays
    /// the selector's press animation.
    pub fn select(
        &mut self,
        doc: &mut Document,
        store: &mut impl KeyValueStore,
        bus: &mut EventBus,
        timers: &mut Timers,
        press: Duration,
        locale: Locale,
    ) {
        self.set_locale(doc, store, bus, locale);
        if let Some(selector) = doc.selector.as_mut() {
            selector.pressed = true;
        }
        if let Some(id) = self.press.take() {
            timers.cancel(id);
        }
        self.press = Some(timers.schedule(press, Task::ReleaseLocalePress));
    }

    /// A key pressed on the focused selector. Enter only takes focus away.
    /// Returns `true` when the key was consumed.
    pub fn on_key(&self, doc: &mut Document, key: &KeyPress) -> bool {
        if key.key != Key::Enter {
            return false;
        }
        if let Some(selector) = doc.selector.as_mut() {
            selector.focused = false;
        }
        true
    }

    pub fn release_press(&mut self, doc: &mut Document) {
        self.press = None;
        if let Some(selector) = doc.selector.as_mut() {
            selector.pressed = false;
        }
    }

    /// Reaction to a language change: dim the localized text, bring it back
    /// after `restore`, and detach the transition at `length`.
    pub fn start_fade(
        &mut self,
        doc: &mut Document,
        timers: &mut Timers,
        restore: Duration,
        length: Duration,
    ) {
        for id in self.fade.drain(..) {
            timers.cancel(id);
        }
        doc.text_fade = TextFade::Dimmed;
        self.fade = vec![
            timers.schedule(restore, Task::RestoreTextOpacity),
            timers.schedule(length, Task::EndTextFade),
        ];
    }

    pub fn restore_opacity(&mut self, doc: &mut Document) {
        doc.text_fade = TextFade::Restoring;
    }

    pub fn end_fade(&mut self, doc: &mut Document) {
        self.fade.clear();
        doc.text_fade = TextFade::Idle;
    }

    fn apply(&mut self, doc: &mut Document, locale: Locale) {
        self.current = locale;
        doc.lang = locale.code().to_string();
        if let Some(selector) = doc.selector.as_mut() {
            selector.value = locale;
        }
        for node in &mut doc.texts {
            if let Some(text) = node.variant(locale) {
                node.text = text.to_string();
            }
        }
        for field in &mut doc.fields {
            if let Some(placeholder) = locale.placeholder(field.name()) {
                field.set_placeholder(placeholder);
            }
        }
        doc.title = locale.title().to_string();
    }
}
