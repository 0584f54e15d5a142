// src/ui/widgets/file_panel.rs

use crate::app::App;
use crate::core::preview::Thumbnail;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the selected file's details and, for images, an inline preview.
pub fn render_file_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Selected File");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(file) = app.file() else {
        frame.render_widget(
            Paragraph::new("No file selected.".dark_gray()).alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let details = Text::from(vec![
        Line::from(Span::styled(file.name.clone(), Style::default().bold())),
        Line::from(vec![Span::raw("Type: "), Span::styled(file.media_type.clone(), Style::default().fg(Color::Cyan))]),
        Line::from(format!("Size: {}", human_size(file.len()))),
    ]);
    frame.render_widget(Paragraph::new(details), chunks[0]);

    if let Some(preview) = app.preview() {
        let body = match preview.thumbnail() {
            Some(thumb) => Paragraph::new(thumbnail_lines(thumb)),
            None => Paragraph::new("(preview unavailable)".dark_gray()),
        };
        let preview_block = Block::default()
            .borders(Borders::TOP)
            .title(format!("Preview: {}", preview.name()));
        frame.render_widget(body.block(preview_block), chunks[1]);
    }
}

/// Paints a thumbnail with upper half blocks: foreground is the even pixel row,
/// background the odd row below it.
pub fn thumbnail_lines(thumb: &Thumbnail) -> Vec<Line<'static>> {
    (0..thumb.height)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span> = (0..thumb.width)
                .map(|x| {
                    let top = thumb.pixel(x, y).map(rgb).unwrap_or(Color::Reset);
                    let bottom = thumb.pixel(x, y + 1).map(rgb).unwrap_or(Color::Reset);
                    Span::styled("▀", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}
