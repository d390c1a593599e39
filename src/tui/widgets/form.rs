//! Contact form widget: one bordered box per field, counter in the corner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{CountStatus, Document, Field, Validity};
use crate::tui::palette::Palette;

/// Rows taken by a single-line field (borders included).
const LINE_ROWS: u16 = 3;
/// Rows taken by a textarea.
const AREA_ROWS: u16 = 6;

/// Height of a field's box.
pub fn field_height(field: &Field) -> u16 {
    if field.is_multiline() {
        AREA_ROWS
    } else {
        LINE_ROWS
    }
}

/// Border colour for a field: validity and count status first, then focus.
pub fn border_style(field: &Field, focused: bool, palette: &Palette) -> Style {
    let color = match (field.validity, field.status) {
        (Some(Validity::Invalid), _) | (_, CountStatus::AtLimit) => palette.error,
        (_, CountStatus::Warning) => palette.warning,
        _ if focused => palette.accent,
        (Some(Validity::Valid), _) => palette.success,
        _ => palette.muted,
    };
    Style::default().fg(color)
}

/// Label for a field, taken from its `label-<name>` text node.
pub fn field_label(doc: &Document, field: &Field) -> String {
    let label = doc
        .text(&format!("label-{}", field.name()))
        .unwrap_or(field.name());
    if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Renders every field of `doc` within `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(
    doc: &Document,
    focus: Option<usize>,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let constraints: Vec<Constraint> = doc
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in doc.fields.iter().enumerate() {
        let is_focused = focus == Some(i);
        let mut block = Block::default()
            .title(field_label(doc, field))
            .borders(Borders::ALL)
            .border_style(border_style(field, is_focused, palette));
        if let Some(counter) = &field.counter {
            let color = match counter.status {
                CountStatus::Normal => palette.muted,
                CountStatus::Warning => palette.warning,
                CountStatus::AtLimit => palette.error,
            };
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} ", counter.text),
                    Style::default().fg(color),
                ))
                .right_aligned(),
            );
        }

        let mut spans = if field.is_empty() {
            vec![Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            )]
        } else if field.has_selection() {
            vec![Span::styled(
                field.value(),
                Style::default().add_modifier(Modifier::REVERSED),
            )]
        } else {
            vec![Span::styled(field.value(), Style::default().fg(palette.text))]
        };
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, rows[i]);

        // Floating notice over the bottom border, like a tooltip.
        if let Some(warning) = doc.warning_for(field.name()) {
            let notice = Paragraph::new(Span::styled(
                format!(" {} ", warning.text),
                Style::default()
                    .fg(palette.background)
                    .bg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ));
            let notice_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + field_height(field).saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(notice, notice_area.intersection(area));
        }
    }
}
