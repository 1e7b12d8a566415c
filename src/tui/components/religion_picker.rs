//! Religion selection cards and confirmation panel.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::picker::Picker;
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::theme::*;
use crate::wizard::ReligionPicker;

use super::wrap_text;

const CARD_HEIGHT: u16 = 5;
const WIDE_LAYOUT_MIN_WIDTH: u16 = 60;

const TITLE: &str = "Select Your Religion";
const DESCRIPTION: &str = "Please choose your religious faith to customize the appropriate services and rituals for your loved one.";
const HINT: &str = "Can't find your religion? Select \"Other\" and specify in the notes section.";
const PROCEEDING: &str = "Proceeding to the next step...";

/// Cards per row for a given width.
pub fn grid_columns(width: u16) -> usize {
    if width >= WIDE_LAYOUT_MIN_WIDTH { 3 } else { 2 }
}

/// Render the religion step: header, one card per featured religion, a hint
/// and, once something is selected, the confirmation panel.
///
/// `selected` is the wizard's current choice. Every card registers a click
/// region that selects it.
pub fn render_religion_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &mut ReligionPicker,
    selected: Option<&str>,
    interactions: &mut InteractionRegistry,
) {
    let columns = grid_columns(area.width);
    picker.set_columns(columns);

    let description = wrap_text(DESCRIPTION, area.width.saturating_sub(4) as usize);
    let rows = picker.len().div_ceil(columns);

    let layout = Layout::vertical([
        Constraint::Length(2 + description.len() as u16), // Title + description
        Constraint::Length(1),                              // Spacing
        Constraint::Length(rows as u16 * CARD_HEIGHT),      // Cards
        Constraint::Length(2),                              // Hint
        Constraint::Length(4),                              // Confirmation
        Constraint::Min(0),
    ])
    .split(area);

    // Header
    let mut header = vec![
        Line::styled(TITLE, Style::new().fg(TEXT_WHITE).bold()),
        Line::raw(""),
    ];
    header.extend(
        description
            .into_iter()
            .map(|line| Line::styled(line, Style::new().fg(TEXT_DIM))),
    );
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        layout[0],
    );

    render_cards(frame, layout[2], picker, selected, columns, interactions);

    frame.render_widget(
        Paragraph::new(vec![
            Line::raw(""),
            Line::styled(HINT, Style::new().fg(TEXT_DIM)),
        ])
        .alignment(Alignment::Center),
        layout[3],
    );

    if let Some(id) = selected {
        // An id without a record shows no name rather than failing
        let name = picker.catalog().display_name(id).unwrap_or("");
        render_confirmation(frame, layout[4], name);
    }
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    picker: &ReligionPicker,
    selected: Option<&str>,
    columns: usize,
    interactions: &mut InteractionRegistry,
) {
    let row_areas = Layout::vertical(
        (0..picker.len().div_ceil(columns)).map(|_| Constraint::Length(CARD_HEIGHT)),
    )
    .split(area);

    for (i, religion) in picker.options().iter().enumerate() {
        let Some(row_area) = row_areas.get(i / columns) else {
            break;
        };
        let cells = Layout::horizontal(
            (0..columns).map(|_| Constraint::Ratio(1, columns as u32)),
        )
        .split(*row_area);
        let card_area = cells[i % columns];

        let is_selected = selected == Some(religion.id.as_str());
        let is_highlighted = i == picker.cursor();

        let border_color = if is_selected {
            AMBER
        } else if is_highlighted {
            TEXT_WHITE
        } else {
            BORDER_IDLE
        };

        let name_style = if is_selected {
            Style::new().fg(AMBER_LIGHT).bold()
        } else if is_highlighted {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        let indicator = if is_selected {
            Line::styled("✓ selected", Style::new().fg(AMBER))
        } else {
            Line::raw("")
        };

        // The glyph row is left blank and filled by place_glyph
        let lines = vec![
            Line::raw(""),
            Line::styled(religion.name.as_str(), name_style),
            indicator,
        ];

        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .title_style(Style::new().fg(TEXT_DIM))
            .borders(Borders::ALL)
            .border_style(Style::new().fg(border_color))
            .style(if is_selected {
                Style::new().bg(AMBER_DARK)
            } else {
                Style::new().bg(Color::Reset)
            });

        let inner = block.inner(card_area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            card_area,
        );
        place_glyph(
            frame.buffer_mut(),
            inner,
            picker.catalog().symbol(&religion.id),
            Style::new().fg(AMBER_LIGHT),
        );

        interactions.register_religion_card(&religion.id, ClickRegion::from(card_area));
    }
}

/// Center a two-cell glyph on the first row of `area`.
///
/// Glyphs like "🕉️" end in U+FE0F and are measured one cell wide while
/// terminals draw them two wide. The glyph takes the left cell and the right
/// cell is marked skip so the backend never writes over it.
fn place_glyph(buf: &mut Buffer, area: Rect, glyph: &str, style: Style) {
    if area.width < 2 || area.height == 0 {
        return;
    }
    let x = area.x + (area.width - 2) / 2;
    if let Some(cell) = buf.cell_mut((x, area.y)) {
        cell.set_symbol(glyph).set_style(style);
    }
    if let Some(cell) = buf.cell_mut((x + 1, area.y)) {
        cell.set_skip(true);
    }
}

fn render_confirmation(frame: &mut Frame, area: Rect, name: &str) {
    let lines = vec![
        Line::styled(
            format!("✓ {} selected", name),
            Style::new().fg(AMBER).bold(),
        ),
        Line::styled(PROCEEDING, Style::new().fg(TEXT_DIM)),
    ];

    let width = 44u16.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let panel_area = Rect::new(x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(AMBER));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        panel_area,
    );
}
