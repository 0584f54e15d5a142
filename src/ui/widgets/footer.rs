// src/ui/widgets/footer.rs

use crate::app::App;
use crate::core::client::BackendStatus;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer: the submit control, key hints and backend status.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));

    let submit = if app.is_submit_enabled() {
        Span::styled(format!("[ {} ]", app.submit_label()), Style::new().bold().fg(Color::Green))
    } else {
        Span::styled(format!("[ {} ]", app.submit_label()), Style::new().fg(Color::DarkGray))
    };

    let backend_style = match app.backend {
        BackendStatus::Online => Style::new().fg(Color::Green),
        BackendStatus::Offline => Style::new().fg(Color::Red),
        BackendStatus::Checking => Style::new().fg(Color::DarkGray),
    };

    let spans = Line::from(vec![
        key("Ctrl+S"),
        Span::raw(" "),
        submit,
        Span::raw("  "),
        key("Enter"),
        Span::raw(" select  "),
        key("Ctrl+R"),
        Span::raw(" reset  "),
        key("Esc"),
        Span::raw(" quit  | backend: "),
        Span::styled(app.backend.to_string(), backend_style),
    ]);

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
