//! Status bar widget: one-line locale/theme/draft context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Locale, Theme, ToggleIcon};
use crate::tui::palette::Palette;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarContext {
    pub locale: Locale,
    pub theme: Theme,
    /// Fields with a stored draft.
    pub drafts: usize,
    /// Whether the language selector has focus.
    pub selector_focused: bool,
    /// Whether the selector is showing its pressed state.
    pub selector_pressed: bool,
    /// Whether the theme toggle has focus.
    pub toggle_focused: bool,
    /// Whether the toggle is showing its pressed state.
    pub toggle_pressed: bool,
}

/// Text for the theme toggle: icon, then the action it performs.
pub fn toggle_text(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Sun => "\u{2600} light",
        ToggleIcon::Moon => "\u{263E} dark",
    }
}

/// Style for a focusable control: underlined under focus, reversed while pressed.
pub fn control_style(base: Style, focused: bool, pressed: bool) -> Style {
    let mut style = base;
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pressed {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Renders the status bar.
///
/// Display format: `[EN] [☀ light]  2 drafts saved`. The toggle shows the
/// action it will take, so a dark page offers "light".
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, palette: &Palette, frame: &mut Frame, area: Rect) {
    let accent = Style::default().fg(palette.accent);
    let selector_style = control_style(accent, ctx.selector_focused, ctx.selector_pressed);
    let toggle_style = control_style(accent, ctx.toggle_focused, ctx.toggle_pressed);

    let drafts = match ctx.drafts {
        0 => String::new(),
        1 => "1 draft saved".to_string(),
        n => format!("{n} drafts saved"),
    };

    let spans = vec![
        Span::styled(format!("[{}]", ctx.locale.label()), selector_style),
        Span::raw(" "),
        Span::styled(format!("[{}]", toggle_text(ctx.theme.toggle_icon())), toggle_style),
        Span::raw("  "),
        Span::styled(drafts, Style::default().fg(palette.muted)),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
