//! The contact page's behaviours and the [`Page`] that wires them together.
//!
//! Each behaviour owns one concern. They share the [`Document`], the store,
//! the notification bus and the timer queue, all of which live on `Page`.
//! Every entry point runs to completion and then delivers the notifications
//! it produced.

mod drafts;
mod events;
mod guard;
mod locale;
mod theme;
mod timers;

use std::ops::Range;
use std::time::Duration;

use tracing::warn;

pub use drafts::DraftPersistence;
pub use events::{EventBus, Notification, SubscriptionId};
pub use guard::{CharLimitGuard, KeyVerdict};
pub use locale::LocaleSwitcher;
pub use theme::ThemeSwitcher;
pub use timers::{Task, TimerId, Timers};

use crate::config::PageConfig;
use crate::model::{Document, Field, Key, KeyPress, Locale, Theme};
use crate::storage::KeyValueStore;

/// What the browsing environment reports at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Language tag such as `fil-PH` or `en_US.UTF-8`.
    pub language: Option<String>,
    /// Whether the system colour scheme is dark.
    pub prefers_dark: bool,
}

/// What happened to a keystroke sent to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No such field.
    Ignored,
    /// Blocked by the character cap.
    Suppressed,
    /// The default action ran (which may or may not have changed the value).
    Applied,
    /// Enter in a single-line field submitted the form.
    Submitted,
}

/// A loaded contact page.
pub struct Page<S: KeyValueStore> {
    doc: Document,
    store: S,
    config: PageConfig,
    bus: EventBus,
    timers: Timers,
    locale: LocaleSwitcher,
    theme: ThemeSwitcher,
    guard: CharLimitGuard,
    drafts: DraftPersistence,
}

impl<S: KeyValueStore> Page<S> {
    /// Initialises every behaviour against `doc`, as on page load.
    pub fn load(mut doc: Document, store: S, env: &Environment, config: PageConfig) -> Self {
        let mut bus = EventBus::new();
        let locale = LocaleSwitcher::init(&mut doc, &store, env.language.as_deref(), &mut bus);
        let theme = ThemeSwitcher::init(&mut doc, &store, env.prefers_dark);
        let guard = CharLimitGuard::init(&mut doc, &mut bus, config.warning_ratio);
        let drafts = DraftPersistence::new(config.draft_prefix.clone());
        let mut page = Self {
            doc,
            store,
            config,
            bus,
            timers: Timers::new(),
            locale,
            theme,
            guard,
            drafts,
        };
        // Initial locale and counter announcements carry no fade.
        page.deliver_notifications(false);
        page.load_drafts();
        page
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Virtual time since load.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of deferred tasks still waiting.
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    // --- field events ---

    /// A keystroke in a field: cap policy first, then the default action.
    pub fn key_down(&mut self, field: &str, key: KeyPress) -> KeyOutcome {
        if self.doc.field(field).is_none() {
            return KeyOutcome::Ignored;
        }
        if self.guard.on_keydown(&self.doc, field, &key) == KeyVerdict::Reject {
            self.guard.show_warning(
                &mut self.doc,
                &mut self.timers,
                self.locale.current(),
                self.config.warning_duration(),
                field,
            );
            self.dispatch();
            return KeyOutcome::Suppressed;
        }
        let multiline = self.doc.field(field).is_some_and(Field::is_multiline);
        if key.key == Key::Enter && !multiline && !(key.ctrl || key.meta) {
            self.submit();
            return KeyOutcome::Submitted;
        }
        if self.apply_default(field, &key) {
            self.fire_input(field);
        } else {
            self.dispatch();
        }
        KeyOutcome::Applied
    }

    /// Pastes `text` into a field. The value may briefly exceed the cap; the
    /// deferred inspection cuts it back on the next [`advance`](Self::advance).
    pub fn paste(&mut self, field: &str, text: &str) {
        let Some(f) = self.doc.field_mut(field) else {
            return;
        };
        f.insert(text);
        self.guard.on_paste(&mut self.timers, field);
        self.fire_input(field);
    }

    /// Replaces a field's value from outside (autofill, scripts) and fires input.
    pub fn input(&mut self, field: &str, value: &str) {
        let Some(f) = self.doc.field_mut(field) else {
            return;
        };
        f.set_value(value);
        self.fire_input(field);
    }

    /// Sets a field's selection, in characters.
    pub fn select(&mut self, field: &str, range: Range<usize>) {
        if let Some(f) = self.doc.field_mut(field) {
            f.select(range);
        }
    }

    pub fn change(&mut self, _field: &str) {
        self.drafts.save_all(&self.doc, &mut self.store);
    }

    pub fn blur(&mut self, _field: &str) {
        self.drafts.save_all(&self.doc, &mut self.store);
    }

    /// Submits the contact form. The default submission never happens.
    pub fn submit(&mut self) {
        self.drafts.submit(
            &mut self.doc,
            &mut self.timers,
            self.locale.current(),
            &self.config,
        );
        self.dispatch();
    }

    // --- locale and theme ---

    /// A language picked in the selector.
    pub fn select_locale(&mut self, locale: Locale) {
        self.locale.select(
            &mut self.doc,
            &mut self.store,
            &mut self.bus,
            &mut self.timers,
            self.config.press_duration(),
            locale,
        );
        self.dispatch();
    }

    /// Focus entering or leaving the language selector.
    pub fn set_selector_focus(&mut self, focused: bool) {
        if let Some(selector) = self.doc.selector.as_mut() {
            selector.focused = focused;
        }
    }

    /// A key pressed while the language selector has focus. Returns `true`
    /// if the selector consumed it.
    pub fn locale_selector_key(&mut self, key: KeyPress) -> bool {
        self.locale.on_key(&mut self.doc, &key)
    }

    pub fn current_locale(&self) -> Locale {
        self.locale.current()
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme
            .set_theme(&mut self.doc, &mut self.store, &mut self.bus, theme);
        self.dispatch();
    }

    pub fn click_theme_toggle(&mut self) {
        self.theme.toggle(
            &mut self.doc,
            &mut self.store,
            &mut self.bus,
            &mut self.timers,
            self.config.press_duration(),
        );
        self.dispatch();
    }

    /// A key pressed while the theme toggle has focus. Returns `true` if it
    /// activated the toggle.
    pub fn theme_toggle_key(&mut self, key: KeyPress) -> bool {
        let consumed = self.theme.on_key(
            &mut self.doc,
            &mut self.store,
            &mut self.bus,
            &mut self.timers,
            self.config.press_duration(),
            &key,
        );
        self.dispatch();
        consumed
    }

    pub fn system_theme_changed(&mut self, prefers_dark: bool) {
        self.theme
            .system_preference_changed(&mut self.doc, &self.store, &mut self.bus, prefers_dark);
        self.dispatch();
    }

    // --- counters ---

    /// Recomputes every guarded counter.
    pub fn refresh_counters(&mut self) {
        self.guard.refresh_all(&mut self.doc, &mut self.bus);
        self.dispatch();
    }

    pub fn set_max_length(&mut self, field: &str, max: usize) {
        self.guard
            .set_max_length(&mut self.doc, &mut self.bus, field, max);
        self.dispatch();
    }

    // --- drafts ---

    pub fn save_drafts(&mut self) {
        self.drafts.save_all(&self.doc, &mut self.store);
    }

    /// Restores stored drafts and fires input on each restored field, so
    /// counters recompute and blank drafts are dropped from the store.
    pub fn load_drafts(&mut self) {
        for field in self.drafts.restore(&mut self.doc, &self.store) {
            self.fire_input(&field);
        }
        self.dispatch();
    }

    pub fn clear_drafts(&mut self) {
        self.drafts.clear_all(&self.doc, &mut self.store);
    }

    /// Saves immediately and drops any pending coalesced save. Call before
    /// the page goes away.
    pub fn flush(&mut self) {
        self.drafts
            .flush(&self.doc, &mut self.store, &mut self.timers);
    }

    /// The page was shown again. When it came back from the navigation
    /// cache, drafts are reloaded as on first load.
    pub fn page_show(&mut self, persisted: bool) {
        if persisted {
            self.load_drafts();
        }
    }

    // --- notifications and time ---

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        self.bus.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Moves the clock forward, running every task that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some(task) = self.timers.pop_due(until) {
            self.run_task(task);
            self.dispatch();
        }
    }

    // --- internals ---

    /// The field's own reaction to a permitted key. Returns `true` if the
    /// value changed.
    fn apply_default(&mut self, field: &str, key: &KeyPress) -> bool {
        let Some(f) = self.doc.field_mut(field) else {
            return false;
        };
        match key.key {
            Key::Char(c) if key.ctrl || key.meta => match c.to_ascii_lowercase() {
                'a' => {
                    f.select_all();
                    false
                }
                'x' => f.delete_selection(),
                _ => false,
            },
            Key::Char(c) => type_char(f, c),
            Key::Enter if f.is_multiline() => type_char(f, '\n'),
            Key::Backspace => f.delete_backward(),
            Key::Delete => f.delete_selection(),
            Key::Left | Key::Right | Key::Up | Key::Down | Key::Home | Key::End => {
                if !key.shift {
                    f.clear_selection();
                }
                false
            }
            Key::Enter | Key::Tab | Key::Escape | Key::Other => false,
        }
    }

    /// Everything listening to a field's `input` event.
    fn fire_input(&mut self, field: &str) {
        self.guard.on_input(&mut self.doc, &mut self.bus, field);
        self.drafts.save_all(&self.doc, &mut self.store);
        self.drafts.schedule_save(&mut self.timers, &self.config);
        self.dispatch();
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::InspectPaste { field } => self.guard.inspect_paste(
                &mut self.doc,
                &mut self.bus,
                &mut self.timers,
                self.locale.current(),
                self.config.warning_duration(),
                &field,
            ),
            Task::DismissWarning { id } => CharLimitGuard::dismiss_warning(&mut self.doc, id),
            Task::BannerExit => {
                if let Some(banner) = self.doc.banner.as_mut() {
                    banner.exiting = true;
                }
            }
            Task::DismissBanner => self.doc.banner = None,
            Task::ResetForm => {
                self.drafts
                    .reset_form(&mut self.doc, &mut self.store, &mut self.timers);
                self.guard.reset_counters(&mut self.doc);
            }
            Task::DebouncedSave => self.drafts.debounce_elapsed(&self.doc, &mut self.store),
            Task::EndTransition => self.theme.end_transition(&mut self.doc),
            Task::ReleasePress => self.theme.release_press(&mut self.doc),
            Task::ReleaseLocalePress => self.locale.release_press(&mut self.doc),
            Task::RestoreTextOpacity => self.locale.restore_opacity(&mut self.doc),
            Task::EndTextFade => self.locale.end_fade(&mut self.doc),
        }
    }

    /// Delivers queued notifications: internal reactions first, then
    /// external subscribers.
    fn dispatch(&mut self) {
        self.deliver_notifications(true);
    }

    fn deliver_notifications(&mut self, animate: bool) {
        while let Some(notification) = self.bus.next() {
            match &notification {
                Notification::LanguageChanged { locale } => {
                    CharLimitGuard::relocalize(&mut self.doc, *locale);
                    if animate {
                        self.locale.start_fade(
                            &mut self.doc,
                            &mut self.timers,
                            self.config.fade_restore_delay(),
                            self.config.fade_duration(),
                        );
                    }
                }
                Notification::ThemeChanged { .. } => self.theme.start_transition(
                    &mut self.doc,
                    &mut self.timers,
                    self.config.transition_duration(),
                ),
                Notification::CharLimitUpdate { .. } => {}
            }
            self.bus.deliver(&notification);
        }
    }
}

impl<S: KeyValueStore + std::fmt::Debug> std::fmt::Debug for Page<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("doc", &self.doc)
            .field("store", &self.store)
            .field("locale", &self.locale)
            .field("theme", &self.theme)
            .field("now", &self.timers.now())
            .finish_non_exhaustive()
    }
}

/// Inserts a typed character unless the field's native cap forbids it.
fn type_char(field: &mut Field, ch: char) -> bool {
    if let Some(max) = field.cap() {
        let selected = field.selection().map_or(0, |r| r.len());
        if field.len() - selected >= max {
            return false;
        }
    }
    let mut buf = [0u8; 4];
    field.insert(ch.encode_utf8(&mut buf));
    true
}

/// Writes (`Some`) or deletes (`None`) a store entry, logging failures.
/// The page keeps working from its in-memory state either way.
fn write_store(store: &mut impl KeyValueStore, key: &str, value: Option<&str>) {
    let result = match value {
        Some(value) => store.set(key, value),
        None => store.remove(key),
    };
    if let Err(error) = result {
        warn!(key, %error, "store write failed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::{CountStatus, TRANSITION_CLASS};
    use crate::storage::{MemoryStore, StoreError, THEME_KEY};

    fn page() -> Page<MemoryStore> {
        Page::load(
            Document::contact_page(),
            MemoryStore::new(),
            &Environment::default(),
            PageConfig::default(),
        )
    }

    fn type_str(page: &mut Page<MemoryStore>, field: &str, text: &str) {
        for ch in text.chars() {
            page.key_down(field, KeyPress::char(ch));
        }
    }

    fn value<'a>(page: &'a Page<MemoryStore>, field: &str) -> &'a str {
        page.document().field(field).unwrap().value()
    }

    mod typing {
        use super::*;

        #[test]
        fn typing_updates_value_counter_and_draft() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            assert_eq!(value(&page, "name"), "Juan");
            assert_eq!(page.document().counter_text("name"), Some("4/50"));
            assert_eq!(
                page.store().get("portfolio_form_name"),
                Some("Juan".to_string())
            );
        }

        #[test]
        fn unknown_field_is_ignored() {
            let mut page = page();
            assert_eq!(page.key_down("phone", KeyPress::char('1')), KeyOutcome::Ignored);
        }

        #[test]
        fn enter_in_single_line_field_submits() {
            let mut page = page();
            assert_eq!(
                page.key_down("name", KeyPress::new(Key::Enter)),
                KeyOutcome::Submitted
            );
            assert!(page.document().banner.is_some());
        }

        #[test]
        fn enter_in_textarea_inserts_newline() {
            let mut page = page();
            type_str(&mut page, "message", "hi");
            page.key_down("message", KeyPress::new(Key::Enter));
            assert_eq!(value(&page, "message"), "hi\n");
        }

        #[test]
        fn ctrl_a_then_type_replaces_everything() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            page.key_down("name", KeyPress::ctrl('a'));
            type_str(&mut page, "name", "M");
            assert_eq!(value(&page, "name"), "M");
        }

        #[test]
        fn ctrl_x_cuts_selection() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            page.select("name", 0..2);
            page.key_down("name", KeyPress::ctrl('x'));
            assert_eq!(value(&page, "name"), "an");
        }

        #[test]
        fn arrow_collapses_selection() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            page.select("name", 0..2);
            page.key_down("name", KeyPress::new(Key::Left));
            assert!(!page.document().field("name").unwrap().has_selection());
        }

        #[test]
        fn clearing_a_field_deletes_its_draft() {
            let mut page = page();
            type_str(&mut page, "name", "J");
            page.key_down("name", KeyPress::new(Key::Backspace));
            assert_eq!(page.store().get("portfolio_form_name"), None);
        }
    }

    mod cap {
        use super::*;

        fn small_page() -> Page<MemoryStore> {
            let mut page = page();
            page.set_max_length("name", 3);
            page
        }

        #[test]
        fn full_field_suppresses_and_warns() {
            let mut page = small_page();
            type_str(&mut page, "name", "abc");
            assert_eq!(page.key_down("name", KeyPress::char('d')), KeyOutcome::Suppressed);
            assert_eq!(value(&page, "name"), "abc");
            assert!(page.document().warning_for("name").is_some());
        }

        #[test]
        fn warning_disappears_after_two_seconds() {
            let mut page = small_page();
            type_str(&mut page, "name", "abcd");
            page.advance(Duration::from_millis(1999));
            assert!(page.document().warning_for("name").is_some());
            page.advance(Duration::from_millis(1));
            assert!(page.document().warning_for("name").is_none());
        }

        #[test]
        fn paste_is_truncated_on_next_turn() {
            let mut page = small_page();
            page.paste("name", "abcdef");
            assert_eq!(value(&page, "name"), "abcdef");
            page.advance(Duration::ZERO);
            assert_eq!(value(&page, "name"), "abc");
            assert_eq!(page.document().counter_text("name"), Some("3/3"));
            assert!(page.document().warning_for("name").is_some());
        }

        #[test]
        fn typing_replaces_selection_at_cap() {
            let mut page = small_page();
            type_str(&mut page, "name", "abc");
            page.select("name", 2..3);
            assert_eq!(page.key_down("name", KeyPress::char('z')), KeyOutcome::Applied);
            assert_eq!(value(&page, "name"), "abz");
        }
    }

    mod notifications {
        use super::*;

        fn record(page: &mut Page<MemoryStore>) -> Rc<RefCell<Vec<Notification>>> {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&seen);
            page.subscribe(move |n| sink.borrow_mut().push(n.clone()));
            seen
        }

        #[test]
        fn typing_broadcasts_char_limit_update() {
            let mut page = page();
            let seen = record(&mut page);
            page.key_down("email", KeyPress::char('a'));
            assert_eq!(
                *seen.borrow(),
                vec![Notification::CharLimitUpdate {
                    field: "email".into(),
                    current_length: 1,
                    max_length: 100,
                    remaining: 99,
                }]
            );
        }

        #[test]
        fn locale_change_rewrites_visible_warning() {
            let mut page = page();
            page.set_max_length("name", 1);
            type_str(&mut page, "name", "ab");
            page.select_locale(Locale::Fil);
            assert_eq!(
                page.document().warning_for("name").unwrap().text,
                "Naabot na ang limitasyon ng mga karakter!"
            );
        }

        #[test]
        fn theme_change_runs_transition() {
            let mut page = page();
            page.click_theme_toggle();
            assert!(page.document().has_root_class(TRANSITION_CLASS));
            assert!(page.document().toggle.as_ref().unwrap().pressed);
            page.advance(Duration::from_millis(300));
            assert!(!page.document().has_root_class(TRANSITION_CLASS));
            assert!(!page.document().toggle.as_ref().unwrap().pressed);
        }

        #[test]
        fn system_driven_change_also_transitions() {
            let mut page = page();
            page.system_theme_changed(true);
            assert_eq!(page.current_theme(), Theme::Dark);
            assert!(page.document().has_root_class(TRANSITION_CLASS));
        }

        #[test]
        fn refresh_counters_announces_every_guarded_field() {
            let mut page = page();
            let seen = record(&mut page);
            page.refresh_counters();
            assert_eq!(seen.borrow().len(), 4);
        }

        #[test]
        fn set_theme_persists_and_announces() {
            let mut page = page();
            let seen = record(&mut page);
            page.set_theme(Theme::Dark);
            assert_eq!(page.store().get(THEME_KEY), Some("dark".to_string()));
            assert_eq!(
                *seen.borrow(),
                vec![Notification::ThemeChanged { theme: Theme::Dark }]
            );
        }

        #[test]
        fn unsubscribe_stops_delivery() {
            let mut page = page();
            let seen = Rc::new(RefCell::new(0));
            let sink = Rc::clone(&seen);
            let id = page.subscribe(move |_| *sink.borrow_mut() += 1);
            assert!(page.unsubscribe(id));
            page.select_locale(Locale::Fil);
            assert_eq!(*seen.borrow(), 0);
        }
    }

    mod selector {
        use super::*;
        use crate::model::{Key, TextFade};

        fn selector(page: &Page<MemoryStore>) -> &crate::model::LocaleSelector {
            page.document().selector.as_ref().unwrap()
        }

        #[test]
        fn load_does_not_fade() {
            let page = Page::load(
                Document::contact_page(),
                MemoryStore::new(),
                &Environment {
                    language: Some("fil".into()),
                    prefers_dark: false,
                },
                PageConfig::default(),
            );
            assert_eq!(page.document().text_fade, TextFade::Idle);
            assert_eq!(selector(&page).value, Locale::Fil);
            assert_eq!(page.pending_tasks(), 0);
        }

        #[test]
        fn selection_presses_for_150ms() {
            let mut page = page();
            page.select_locale(Locale::Fil);
            assert!(selector(&page).pressed);
            assert_eq!(selector(&page).value, Locale::Fil);
            page.advance(Duration::from_millis(149));
            assert!(selector(&page).pressed);
            page.advance(Duration::from_millis(1));
            assert!(!selector(&page).pressed);
        }

        #[test]
        fn reselecting_restarts_the_press() {
            let mut page = page();
            page.select_locale(Locale::Fil);
            page.advance(Duration::from_millis(100));
            page.select_locale(Locale::En);
            page.advance(Duration::from_millis(100));
            assert!(selector(&page).pressed);
            page.advance(Duration::from_millis(50));
            assert!(!selector(&page).pressed);
        }

        #[test]
        fn language_change_fades_localized_text() {
            let mut page = page();
            page.select_locale(Locale::Fil);
            assert_eq!(page.document().text_fade, TextFade::Dimmed);
            page.advance(Duration::from_millis(99));
            assert_eq!(page.document().text_fade, TextFade::Dimmed);
            page.advance(Duration::from_millis(1));
            assert_eq!(page.document().text_fade, TextFade::Restoring);
            page.advance(Duration::from_millis(199));
            assert_eq!(page.document().text_fade, TextFade::Restoring);
            page.advance(Duration::from_millis(1));
            assert_eq!(page.document().text_fade, TextFade::Idle);
            assert_eq!(page.pending_tasks(), 0);
        }

        #[test]
        fn overlapping_changes_keep_one_fade() {
            let mut page = page();
            page.select_locale(Locale::Fil);
            page.advance(Duration::from_millis(250));
            page.select_locale(Locale::En);
            assert_eq!(page.document().text_fade, TextFade::Dimmed);
            page.advance(Duration::from_millis(50));
            assert_eq!(page.document().text_fade, TextFade::Dimmed);
            page.advance(Duration::from_millis(250));
            assert_eq!(page.document().text_fade, TextFade::Idle);
        }

        #[test]
        fn enter_blurs_the_selector() {
            let mut page = page();
            page.set_selector_focus(true);
            assert!(selector(&page).focused);
            assert!(!page.locale_selector_key(KeyPress::char('a')));
            assert!(selector(&page).focused);
            assert!(page.locale_selector_key(KeyPress::new(Key::Enter)));
            assert!(!selector(&page).focused);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn reset_after_two_seconds() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            type_str(&mut page, "email", "a@b.com");
            page.submit();
            page.advance(Duration::from_millis(1999));
            assert_eq!(value(&page, "name"), "Juan");
            page.advance(Duration::from_millis(1));
            assert_eq!(value(&page, "name"), "");
            assert!(page.store().is_empty());
            let email = page.document().field("email").unwrap();
            assert_eq!(email.counter.as_ref().unwrap().text, "0/100");
            assert_eq!(email.status, CountStatus::Normal);
            assert_eq!(email.validity, None);
        }

        #[test]
        fn banner_exits_then_disappears() {
            let mut page = page();
            page.submit();
            page.advance(Duration::from_millis(4699));
            assert!(!page.document().banner.as_ref().unwrap().exiting);
            page.advance(Duration::from_millis(1));
            assert!(page.document().banner.as_ref().unwrap().exiting);
            page.advance(Duration::from_millis(300));
            assert!(page.document().banner.is_none());
        }

        #[test]
        fn banner_is_localized() {
            let mut page = page();
            page.select_locale(Locale::Fil);
            page.submit();
            assert_eq!(
                page.document().banner.as_ref().unwrap().text,
                "Salamat! Ang inyong mensahe ay naipadala na."
            );
        }
    }

    mod drafts {
        use super::*;

        #[test]
        fn page_show_from_cache_reloads_drafts() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            page.input("name", "");
            // Another tab wrote a draft meanwhile.
            page.store.set("portfolio_form_name", "Maria").unwrap();
            page.page_show(false);
            assert_eq!(value(&page, "name"), "");
            page.page_show(true);
            assert_eq!(value(&page, "name"), "Maria");
            assert_eq!(page.document().counter_text("name"), Some("5/50"));
        }

        #[test]
        fn whitespace_draft_is_restored_then_dropped() {
            let store: MemoryStore = [("portfolio_form_name", "   ")].into_iter().collect();
            let page = Page::load(
                Document::contact_page(),
                store,
                &Environment::default(),
                PageConfig::default(),
            );
            assert_eq!(value(&page, "name"), "   ");
            assert_eq!(page.store().get("portfolio_form_name"), None);
        }

        #[test]
        fn restore_schedules_coalesced_save() {
            let store: MemoryStore = [("portfolio_form_name", "Juan")].into_iter().collect();
            let mut page = Page::load(
                Document::contact_page(),
                store,
                &Environment::default(),
                PageConfig::default(),
            );
            assert_eq!(page.pending_tasks(), 1);
            page.advance(Duration::from_millis(500));
            assert_eq!(page.pending_tasks(), 0);
            assert_eq!(
                page.store().get("portfolio_form_name"),
                Some("Juan".to_string())
            );
        }

        #[test]
        fn clear_drafts_leaves_values() {
            let mut page = page();
            type_str(&mut page, "name", "Juan");
            page.clear_drafts();
            assert_eq!(value(&page, "name"), "Juan");
            assert_eq!(page.store().get("portfolio_form_name"), None);
        }

        #[test]
        fn flush_cancels_pending_debounce() {
            let mut page = page();
            type_str(&mut page, "name", "J");
            assert!(page.pending_tasks() > 0);
            page.flush();
            assert_eq!(page.pending_tasks(), 0);
        }
    }

    mod store_failures {
        use super::*;

        /// A store whose writes always fail.
        #[derive(Debug, Default)]
        struct ReadOnlyStore;

        impl KeyValueStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }

            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::NoDataDir)
            }

            fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
                Err(StoreError::NoDataDir)
            }
        }

        #[test]
        fn failed_writes_do_not_stop_the_page() {
            let mut page = Page::load(
                Document::contact_page(),
                ReadOnlyStore,
                &Environment::default(),
                PageConfig::default(),
            );
            page.key_down("name", KeyPress::char('J'));
            page.click_theme_toggle();
            page.select_locale(Locale::Fil);
            assert_eq!(page.document().field("name").unwrap().value(), "J");
            assert_eq!(page.current_theme(), Theme::Dark);
            assert_eq!(page.current_locale(), Locale::Fil);
            assert_eq!(page.store().get(THEME_KEY), None);
        }
    }
}
