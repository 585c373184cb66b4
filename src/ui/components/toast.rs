//! Toast overlay component

use crate::state::{Toast, ToastStack};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of a toast including borders
const TOAST_WIDTH: u16 = 44;

/// Columns lost to borders and padding inside a toast
const TOAST_PADDING: u16 = 4;

/// Render the toast stack in the top-right corner, newest on top
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastStack) {
    let mut y = area.y + 1;
    let bottom = area.y + area.height;

    for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
        let lines = toast_lines(toast);
        let height = lines.len() as u16 + 2; // +2 for borders
        if y + height > bottom {
            break;
        }

        let width = TOAST_WIDTH.min(area.width);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height,
        };

        let border_color = if toast.notification.is_destructive() {
            Color::Red
        } else {
            Color::Green
        };

        // Clear the area behind the toast
        frame.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(paragraph, toast_area);

        y += height;
    }
}

fn toast_lines(toast: &Toast) -> Vec<Line<'static>> {
    let notification = &toast.notification;
    let title_color = if notification.is_destructive() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", notification.title),
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    ))];
    let max_width = (TOAST_WIDTH - TOAST_PADDING) as usize;
    lines.extend(
        wrap_text(&notification.description, max_width)
            .into_iter()
            .map(|line| Line::from(format!(" {line}"))),
    );
    lines
}

/// Wrap text to fit within a maximum width (in characters)
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Notification;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Em breve nossa equipe entrará em contato", 16);
        assert_eq!(lines, vec!["Em breve nossa", "equipe entrará", "em contato"]);
    }

    #[test]
    fn test_wrap_text_counts_characters() {
        // "entrará" is 7 characters but 8 bytes
        assert_eq!(wrap_text("entrará já", 10), vec!["entrará já"]);
    }

    #[test]
    fn test_wrap_text_keeps_long_words_whole() {
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_text_empty_is_no_lines() {
        assert!(wrap_text("", 20).is_empty());
    }

    #[test]
    fn test_empty_description_has_only_title() {
        let toast = Toast::new(Notification {
            description: String::new(),
            ..Notification::lead_received()
        });
        assert_eq!(toast_lines(&toast).len(), 1);
    }

    #[test]
    fn test_success_toast_lines() {
        let toast = Toast::new(Notification::lead_received());
        let lines = toast_lines(&toast);
        assert_eq!(lines[0].to_string(), " Obrigado!");
        assert!(lines.len() >= 2);
    }
}
