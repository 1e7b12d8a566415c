//! Review step: shows the choices before the wizard finishes.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the review panel centered in `area`.
pub fn render_review(frame: &mut Frame, area: Rect, app: &App) {
    let popup_width = 50u16.min(area.width.saturating_sub(4));
    let popup_height = 9u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let panel_area = Rect::new(x, y, popup_width, popup_height);

    let religion = match app.wizard.selected_religion() {
        Some(id) => Line::from(vec![
            Span::styled("Religion  ", Style::new().fg(TEXT_DIM)),
            Span::styled(
                format!("{} ", app.catalog().symbol(id)),
                Style::new().fg(AMBER_LIGHT),
            ),
            Span::styled(
                app.selected_name().unwrap_or(id).to_string(),
                Style::new().fg(TEXT_WHITE).bold(),
            ),
        ]),
        None => Line::from(vec![
            Span::styled("Religion  ", Style::new().fg(TEXT_DIM)),
            Span::styled("(none)", Style::new().fg(TEXT_DIM)),
        ]),
    };

    let lines = vec![
        Line::raw(""),
        religion,
        Line::raw(""),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" confirm · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" back", Style::new().fg(TEXT_DIM)),
        ]),
    ];

    let block = Block::default()
        .title(" Review ")
        .title_style(Style::new().fg(AMBER).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(AMBER));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        panel_area,
    );
}
