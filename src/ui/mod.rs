// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
pub mod widgets;

/// Draws one frame. Everything shown is derived from `app`.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::header::render_header(frame, layout.header);
    widgets::input::render_input(frame, app, layout.input);
    widgets::result_view::render_result_view(frame, app, layout.result);
    widgets::file_panel::render_file_panel(frame, app, layout.file_panel);
    widgets::footer::render_footer(frame, app, layout.footer);

    if let Some(message) = &app.notice {
        widgets::notice_popup::render_notice_popup(frame, message, area);
    }
}
