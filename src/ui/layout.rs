// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the widget, computed once per frame.
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub result: Rect,
    pub file_panel: Rect,
    pub footer: Rect,
}

/// Splits the frame into header, path input, content and footer rows.
///
/// The content row holds the result view on the left and the selected-file
/// panel (with the image preview) on the right.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[2]);

    AppLayout {
        header: main_chunks[0],
        input: main_chunks[1],
        result: content_chunks[0],
        file_panel: content_chunks[1],
        footer: main_chunks[3],
    }
}
