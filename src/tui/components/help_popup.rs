//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

const RELIGION_KEYS: &[(&str, &str)] = &[
    ("←/→ h/l ", "Previous / next card"),
    ("↑/↓ k/j ", "Card above / below"),
    ("Enter   ", "Choose highlighted card"),
    ("1-9     ", "Choose card by number"),
    ("Click   ", "Choose card"),
    ("q/Esc   ", "Quit"),
];

const REVIEW_KEYS: &[(&str, &str)] = &[
    ("Enter   ", "Confirm and finish"),
    ("Esc/b   ", "Back to religion"),
    ("q       ", "Quit"),
];

fn section<'a>(title: &'a str, keys: &'a [(&'a str, &'a str)]) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(title, Style::new().fg(AMBER_LIGHT).bold())];
    lines.extend(keys.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {}", key), Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ])
    }));
    lines.push(Line::raw(""));
    lines
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 18u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];
    lines.extend(section("Religion", RELIGION_KEYS));
    lines.extend(section("Review", REVIEW_KEYS));
    lines.push(Line::from(vec![
        Span::styled("[?/Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::new().fg(AMBER).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(AMBER))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
