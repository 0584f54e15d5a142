// src/ui/widgets/result_view.rs

use crate::app::{App, WidgetState, SPINNER_CHARS};
use crate::core::models::ValidationResult;
use ratatui::{
    layout::Margin,
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

pub const OUTCOME_HEADING: &str = "✅ Validation Result:";
pub const SUMMARY_HEADING: &str = "📝 Document Summary:";
pub const KEY_INFO_HEADING: &str = "🔑 Extracted Key Info:";

/// Renders the main pane: instructions, progress, the inline error, or the result.
pub fn render_result_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match app.settled_at() {
        Some(at) => format!("Validation, settled {} (scroll with ↑ ↓)", at.format("%H:%M:%S")),
        None => "Validation (scroll with ↑ ↓)".to_string(),
    };
    let main_block = Block::default().borders(Borders::ALL).title(title);

    if let Some(result) = app.result() {
        let text = result_text(result);
        let line_count = text.lines.len();
        app.set_result_len(line_count);
        let paragraph = Paragraph::new(text)
            .block(main_block)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll_offset as u16, 0));
        frame.render_widget(paragraph, area);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin { vertical: 1, horizontal: 0 }),
            &mut app.result_scroll_state,
        );
        return;
    }

    let content = if let Some(error) = app.error() {
        Paragraph::new(Text::from(vec![
            Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red).bold())),
            Line::from(""),
            Line::from("Press Ctrl+S to try again.".dark_gray()),
        ]))
    } else {
        match app.state {
            WidgetState::Submitting => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
                let name = app.file().map(|f| f.name.as_str()).unwrap_or_default();
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                    Span::raw(format!("Uploading {name}... Please wait.")),
                ]))
            }
            WidgetState::FileSelected => {
                let name = app.file().map(|f| f.name.as_str()).unwrap_or_default();
                Paragraph::new(format!("Ready to validate {name}.\nPress Ctrl+S to upload."))
            }
            _ => Paragraph::new("Type a document path and press Enter to select it."),
        }
    };
    frame.render_widget(
        content.alignment(Alignment::Center).wrap(Wrap { trim: true }).block(main_block),
        area,
    );
}

/// Builds the three result sections: outcome dump, summary, and key/value list.
pub fn result_text(result: &ValidationResult) -> Text<'static> {
    let heading = |s: &'static str| Line::from(s.bold().yellow());

    let mut lines = vec![heading(OUTCOME_HEADING)];
    lines.extend(result.pretty_outcome().lines().map(|l| Line::from(l.to_string())));

    lines.push(Line::from(""));
    lines.push(heading(SUMMARY_HEADING));
    lines.extend(split_lines(&result.summary).map(|l| Line::from(l.to_string())));

    lines.push(Line::from(""));
    lines.push(heading(KEY_INFO_HEADING));
    for (key, value) in &result.key_info {
        let value_style = if value.is_found() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut value_lines = split_lines(value.as_display());
        let first = value_lines.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(format!("{key}:"), Style::default().bold()),
            Span::styled(format!(" {first}"), value_style),
        ]));
        lines.extend(value_lines.map(|l| Line::from(Span::styled(format!("  {l}"), value_style))));
    }

    Text::from(lines)
}

// Spans drop embedded newlines, so server text is split up front. Always yields
// at least one line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}
