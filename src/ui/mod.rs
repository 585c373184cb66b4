//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app.controller.variant());
    forms::draw_lead_form(frame, main_area, &app.controller);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toasts overlay everything else
    components::render_toasts(frame, main_area, &app.toasts);
}
