// src/ui/widgets/header.rs

use ratatui::{prelude::*, widgets::Paragraph};

pub const TITLE: &str = "🧠 AI Document Validator";
pub const TAGLINE: &str =
    "Upload your document or ID (PDF, Word, or image) to verify and extract key info.";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(TITLE.bold().cyan()),
        Line::from(TAGLINE.dark_gray()),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
