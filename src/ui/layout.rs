//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldValue, FormController, FormVariant};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height in rows (headline + tagline + bottom border)
const HEADER_HEIGHT: u16 = 3;

/// Create the main layout: header on top, content below, status bar last
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the promotional header for the current page
pub fn draw_header(frame: &mut Frame, area: Rect, variant: FormVariant) {
    let lines = vec![
        Line::from(Span::styled(
            variant.headline(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            variant.tagline(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Submission status
    let indicator = if app.controller.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    // Focus-specific hints
    spans.push(Span::styled(
        get_form_hints(&app.controller),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        &app.submitter_label,
        Style::default().fg(Color::Blue),
    ));

    // Quit hint on the right
    let quit_hint = " ^C:sair ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused part of the form
fn get_form_hints(controller: &FormController) -> String {
    let submit = format!("{SUBMIT_SHORTCUT}:enviar");
    match controller.active_field().map(|f| &f.value) {
        None => format!("Tab:campos  Enter:enviar  {submit}"),
        Some(FieldValue::Choice { .. }) => format!("Tab:próximo  ←/→:opção  {submit}  Esc:limpar"),
        Some(FieldValue::Checkbox(_)) => format!("Tab:próximo  Espaço:marcar  {submit}  Esc:limpar"),
        Some(_) => format!("Tab:próximo  Shift+Tab:anterior  {submit}  Esc:limpar"),
    }
}
