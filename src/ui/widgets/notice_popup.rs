// src/ui/widgets/notice_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders a blocking notice on top of the rest of the UI.
///
/// The popup is modal: the event loop ignores everything except Enter and Esc
/// while it is shown. `Clear` wipes the area first so the panes underneath do
/// not bleed through.
pub fn render_notice_popup(frame: &mut Frame, message: &str, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().bold())),
        Line::from(""),
        Line::from("Press ".dark_gray() + "Enter".bold().yellow() + " to continue".dark_gray()),
    ]);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let popup_area = centered_rect(50, 30, area);

    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Returns a `Rect` centered in `r`, sized as a percentage of it.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
