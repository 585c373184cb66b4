//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by an input box (top border + content + bottom border)
pub const FIELD_BOX_HEIGHT: u16 = 3;

/// Rows taken by a field including its inline error line
pub const FIELD_HEIGHT: u16 = FIELD_BOX_HEIGHT + 1;

/// Draw a form field with its validation error underneath.
///
/// `area` should be [`FIELD_HEIGHT`] rows tall; the last row is reserved for
/// the error so fields don't jump when errors appear.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let box_area = Rect {
        height: area.height.min(FIELD_BOX_HEIGHT),
        ..area
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match &field.value {
        FieldValue::Checkbox(_) => checkbox_line(field, is_active),
        _ => value_line(field, is_active),
    };

    let block = match &field.value {
        // The consent label is too long for a border title; it is rendered inline
        FieldValue::Checkbox(_) => Block::default().borders(Borders::ALL),
        _ => Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL),
    }
    .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), box_area);

    if let Some(message) = error {
        if area.height > FIELD_BOX_HEIGHT {
            let error_area = Rect {
                y: area.y + FIELD_BOX_HEIGHT,
                height: 1,
                ..area
            };
            let line = Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(line, error_area);
        }
    }
}

fn value_line(field: &FormField, is_active: bool) -> Line<'static> {
    let display_value = field.display_value();

    if display_value.is_empty() {
        let mut spans = vec![];
        if is_active && !field.is_choice() {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            field.id.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
        return Line::from(spans);
    }

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(display_value, style)];
    if is_active && !field.is_choice() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn checkbox_line(field: &FormField, is_active: bool) -> Line<'static> {
    let mark_style = if field.is_checked() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(field.display_value(), mark_style),
        Span::raw(" "),
        Span::raw(field.label.clone()),
    ])
}
