// src/ui/widgets/input.rs
use crate::app::App;
use crate::core::media::ACCEPT_HINT;
use ratatui::{layout::Position, prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders the document path box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Document Path ({ACCEPT_HINT})"));
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // No cursor while the notice popup owns the keyboard.
    if app.notice.is_none() {
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(cursor_offset(&app.input)).saturating_add(1),
            area.y + 1,
        ));
    }
}

/// Columns the typed path occupies; wide glyphs take two cells.
fn cursor_offset(input: &str) -> u16 {
    u16::try_from(Line::from(input).width()).unwrap_or(u16::MAX)
}
