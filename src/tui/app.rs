use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::model::TextFade;
use crate::page::{KeyOutcome, Page};
use crate::storage::{KeyValueStore, draft_key};

use super::error::AppError;
use super::input::to_key_press;
use super::palette::Palette;
use super::widgets::{StatusBarContext, draw_form, draw_status_bar};

/// How long to wait for input before letting the clock run.
const TICK: Duration = Duration::from_millis(50);

/// What has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form field, by position.
    Field(usize),
    /// The language selector.
    LocaleSelector,
    /// The theme toggle button.
    ThemeToggle,
}

/// Top-level application state.
pub struct App<S: KeyValueStore> {
    page: Page<S>,
    focus: Focus,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates a new `App` with the first field focused.
    pub fn new(page: Page<S>) -> Self {
        let focus = if page.document().fields.is_empty() {
            Focus::ThemeToggle
        } else {
            Focus::Field(0)
        };
        Self {
            page,
            focus,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll event → dispatch → advance the clock.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut last = Instant::now();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)? {
                self.handle_event(event::read()?);
            }
            let now = Instant::now();
            self.page.advance(now - last);
            last = now;
        }
        Ok(())
    }

    /// Handles any terminal event. Only key presses and pastes matter.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                if let Some(name) = self.focused_field() {
                    self.page.paste(&name, &text);
                }
            }
            _ => {}
        }
    }

    /// Handles a key event: global keys first, then the focused element.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.page.flush();
                self.should_quit = true;
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::F(2) => {
                let next = self.page.current_locale().other();
                self.page.select_locale(next);
            }
            KeyCode::F(3) => self.page.click_theme_toggle(),
            _ => match self.focus {
                Focus::Field(_) => {
                    if let Some(name) = self.focused_field() {
                        let outcome = self.page.key_down(&name, to_key_press(key));
                        if outcome == KeyOutcome::Submitted {
                            debug!(field = %name, "submitted from keyboard");
                        }
                    }
                }
                Focus::LocaleSelector => self.selector_key(key),
                Focus::ThemeToggle => {
                    self.page.theme_toggle_key(to_key_press(key));
                }
            },
        }
    }

    /// Keys on the language selector: arrows and Space pick the other
    /// language, Enter commits and moves on.
    fn selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                let next = self.page.current_locale().other();
                self.page.select_locale(next);
            }
            _ => {
                if self.page.locale_selector_key(to_key_press(key)) {
                    self.move_focus(true);
                }
            }
        }
    }

    /// Cycles focus through the fields, the language selector and the
    /// theme toggle.
    fn move_focus(&mut self, forward: bool) {
        match self.focus {
            Focus::Field(_) => {
                if let Some(name) = self.focused_field() {
                    self.page.blur(&name);
                }
            }
            Focus::LocaleSelector => self.page.set_selector_focus(false),
            Focus::ThemeToggle => {}
        }
        let count = self.page.document().fields.len();
        // selector then toggle sit after the last field
        let slots = count + 2;
        let current = match self.focus {
            Focus::Field(i) => i,
            Focus::LocaleSelector => count,
            Focus::ThemeToggle => count + 1,
        };
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.focus = match next {
            n if n == count => Focus::LocaleSelector,
            n if n == count + 1 => Focus::ThemeToggle,
            n => Focus::Field(n),
        };
        if self.focus == Focus::LocaleSelector {
            self.page.set_selector_focus(true);
        }
    }

    fn focused_field(&self) -> Option<String> {
        match self.focus {
            Focus::Field(i) => self
                .page
                .document()
                .fields
                .get(i)
                .map(|f| f.name().to_string()),
            Focus::LocaleSelector | Focus::ThemeToggle => None,
        }
    }

    fn status_context(&self) -> StatusBarContext {
        let doc = self.page.document();
        let prefix = &self.page.config().draft_prefix;
        let drafts = doc
            .fields
            .iter()
            .filter(|f| self.page.store().get(&draft_key(prefix, f.name())).is_some())
            .count();
        StatusBarContext {
            locale: self.page.current_locale(),
            theme: self.page.current_theme(),
            drafts,
            selector_focused: doc.selector.as_ref().is_some_and(|s| s.focused),
            selector_pressed: doc.selector.as_ref().is_some_and(|s| s.pressed),
            toggle_focused: self.focus == Focus::ThemeToggle,
            toggle_pressed: doc.toggle.as_ref().is_some_and(|t| t.pressed),
        }
    }

    /// Renders the page: heading, intro, form, banner, status bar, key hints.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let doc = self.page.document();
        let palette = Palette::for_theme(self.page.current_theme());
        let area = frame.area();

        let outer = Block::default()
            .title(format!(" {} ", doc.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background).fg(palette.text));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [heading, intro, form, banner, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        // localized text dims while a language change fades in
        let text_style = if doc.text_fade == TextFade::Idle {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(doc.text("heading").unwrap_or_default())
                .style(text_style.add_modifier(Modifier::BOLD)),
            heading,
        );
        frame.render_widget(
            Paragraph::new(doc.text("intro").unwrap_or_default())
                .style(text_style)
                .wrap(Wrap { trim: true }),
            intro,
        );

        let focus = match self.focus {
            Focus::Field(i) => Some(i),
            Focus::LocaleSelector | Focus::ThemeToggle => None,
        };
        draw_form(doc, focus, &palette, frame, form);

        if let Some(b) = &doc.banner {
            let mut style = Style::default().fg(palette.success);
            if b.exiting {
                style = style.add_modifier(Modifier::DIM);
            }
            frame.render_widget(
                Paragraph::new(b.text.as_str())
                    .style(style)
                    .alignment(Alignment::Center),
                banner,
            );
        }

        draw_status_bar(&self.status_context(), &palette, frame, status);

        let submit = doc.text("submit").unwrap_or("Submit");
        let hints = Line::from(format!(
            "Tab next  Enter {submit}  F2 language  F3 theme  Esc quit"
        ));
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(palette.muted)),
            footer,
        );
    }

    /// Returns the focused element.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the loaded [`Page`].
    pub fn page(&self) -> &Page<S> {
        &self.page
    }
}
