use std::time::Duration;

use tracing::debug;

use super::events::{EventBus, Notification};
use super::timers::{Task, TimerId, Timers};
use super::write_store;
use crate::model::{Document, KeyPress, TRANSITION_CLASS, Theme};
use crate::storage::{KeyValueStore, THEME_KEY};

/// Owns the current theme, the toggle's look, and the transition effect.
#[derive(Debug)]
pub struct ThemeSwitcher {
    current: Theme,
    transition: Option<TimerId>,
    press: Option<TimerId>,
}

impl ThemeSwitcher {
    /// Applies the stored theme, or the system preference when none is stored.
    ///
    /// Nothing is persisted or announced at start-up.
    pub fn init(doc: &mut Document, store: &impl KeyValueStore, prefers_dark: bool) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|code| Theme::from_code(&code))
            .unwrap_or(Theme::from_preference(prefers_dark));
        let mut switcher = Self {
            current: theme,
            transition: None,
            press: None,
        };
        switcher.apply(doc, theme);
        switcher
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persists, applies and announces `theme`.
    pub fn set_theme(
        &mut self,
        doc: &mut Document,
        store: &mut impl KeyValueStore,
        bus: &mut EventBus,
        theme: Theme,
    ) {
        write_store(store, THEME_KEY, Some(theme.code()));
        self.apply(doc, theme);
        debug!(%theme, "theme set");
        bus.publish(Notification::ThemeChanged { theme });
    }

    /// Flips the theme and plays the toggle's press animation.
    pub fn toggle(
        &mut self,
        doc: &mut Document,
        store: &mut impl KeyValueStore,
        bus: &mut EventBus,
        timers: &mut Timers,
        press: Duration,
    ) {
        let next = self.current.other();
        self.set_theme(doc, store, bus, next);
        if let Some(toggle) = doc.toggle.as_mut() {
            toggle.pressed = true;
        }
        if let Some(id) = self.press.take() {
            timers.cancel(id);
        }
        self.press = Some(timers.schedule(press, Task::ReleasePress));
    }

    /// Keyboard activation of the toggle. Enter and Space act as a click;
    /// returns `true` when the key was consumed.
    pub fn on_key(
        &mut self,
        doc: &mut Document,
        store: &mut impl KeyValueStore,
        bus: &mut EventBus,
        timers: &mut Timers,
        press: Duration,
        key: &KeyPress,
    ) -> bool {
        if !key.activates_button() {
            return false;
        }
        self.toggle(doc, store, bus, timers, press);
        true
    }

    /// Follows a system colour-scheme change, unless the user has chosen a
    /// theme explicitly. The followed value is not persisted.
    pub fn system_preference_changed(
        &mut self,
        doc: &mut Document,
        store: &impl KeyValueStore,
        bus: &mut EventBus,
        prefers_dark: bool,
    ) {
        if store.get(THEME_KEY).is_some() {
            return;
        }
        let theme = Theme::from_preference(prefers_dark);
        self.apply(doc, theme);
        debug!(%theme, "theme follows system preference");
        bus.publish(Notification::ThemeChanged { theme });
    }

    /// Reaction to any theme change: put the transition class on the root
    /// for a moment.
    pub fn start_transition(&mut self, doc: &mut Document, timers: &mut Timers, length: Duration) {
        doc.root_classes.insert(TRANSITION_CLASS.to_string());
        if let Some(id) = self.transition.take() {
            timers.cancel(id);
        }
        self.transition = Some(timers.schedule(length, Task::EndTransition));
    }

    pub fn end_transition(&mut self, doc: &mut Document) {
        self.transition = None;
        doc.root_classes.remove(TRANSITION_CLASS);
    }

    pub fn release_press(&mut self, doc: &mut Document) {
        self.press = None;
        if let Some(toggle) = doc.toggle.as_mut() {
            toggle.pressed = false;
        }
    }

    fn apply(&mut self, doc: &mut Document, theme: Theme) {
        self.current = theme;
        doc.theme = Some(theme);
        if let Some(toggle) = doc.toggle.as_mut() {
            toggle.icon = theme.toggle_icon();
            toggle.label = theme.toggle_label().to_string();
        }
    }
}
