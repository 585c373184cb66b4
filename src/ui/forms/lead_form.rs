//! Lead form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{FieldValue, FormController, FormField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Widest the form gets on large terminals
const MAX_FORM_WIDTH: u16 = 90;

/// Label shown on the submit button while a submission is in flight
const SUBMITTING_LABEL: &str = "Enviando...";

/// Draw the lead form: inputs two per row, the consent checkbox on its own
/// row and the submit button last
pub fn draw_lead_form(frame: &mut Frame, area: Rect, controller: &FormController) {
    let form = controller.form();
    let area = centered(area, MAX_FORM_WIDTH);

    let block = Block::default()
        .title(" Dados de contato ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (inputs, checkboxes): (Vec<(usize, &FormField)>, Vec<(usize, &FormField)>) = form
        .fields
        .iter()
        .enumerate()
        .partition(|(_, f)| !matches!(f.value, FieldValue::Checkbox(_)));
    let input_rows: Vec<&[(usize, &FormField)]> = inputs.chunks(2).collect();

    let mut constraints: Vec<Constraint> = input_rows
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend(checkboxes.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, pair) in input_rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        for (column, &entry) in pair.iter().enumerate() {
            draw_entry(frame, columns[column], controller, entry);
        }
    }

    let checkbox_start = input_rows.len();
    for (offset, &entry) in checkboxes.iter().enumerate() {
        draw_entry(frame, rows[checkbox_start + offset], controller, entry);
    }

    let button_area = rows[checkbox_start + checkboxes.len()];
    let label = if controller.is_submitting() {
        SUBMITTING_LABEL
    } else {
        controller.variant().submit_label()
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_button_row_active(),
        !controller.is_submitting(),
    );
}

fn draw_entry(
    frame: &mut Frame,
    area: Rect,
    controller: &FormController,
    (index, field): (usize, &FormField),
) {
    draw_field(
        frame,
        area,
        field,
        controller.form().active_field_index == index,
        controller.errors().error(field.id),
    );
}

fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
