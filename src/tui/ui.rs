use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::events::Action;
use crate::wizard::WizardStep;
use super::components::{render_help_popup, render_religion_picker, render_review};
use super::interaction::{ClickRegion, InteractiveRegion};
use super::theme::*;

const VISIBLE_STEPS: [WizardStep; 2] = [WizardStep::Religion, WizardStep::Review];

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: step bar, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Step bar + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_step_bar(frame, main_layout[0], app.wizard.step());

    let content = main_layout[1];
    match app.wizard.step() {
        WizardStep::Religion => {
            let selected = app.wizard.selected_religion();
            if let Some(picker) = app.picker.as_mut() {
                render_religion_picker(frame, content, picker, selected, &mut app.interactions);
            }
        }
        WizardStep::Review => render_review(frame, content, app),
        WizardStep::Finished => {}
    }

    render_hotkeys(frame, main_layout[2], app.wizard.step());

    if app.show_help {
        render_help_popup(frame, area);
        // Swallow clicks while the popup is open
        app.interactions.register(
            InteractiveRegion::clickable("help_popup", ClickRegion::from(area), Action::CloseHelp)
                .with_priority(10),
        );
    }
}

fn render_step_bar(frame: &mut Frame, area: Rect, current: WizardStep) {
    let total = VISIBLE_STEPS.len();
    let mut spans = vec![Span::styled(" rites ", Style::new().fg(AMBER).bold())];

    for (i, step) in VISIBLE_STEPS.iter().enumerate() {
        spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        let style = if *step == current {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        spans.push(Span::styled(
            format!("{}/{} {}", i + 1, total, step.title()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, step: WizardStep) {
    let keys: &[(&str, &str)] = match step {
        WizardStep::Religion => &[
            ("[←↑↓→]", " move · "),
            ("[Enter]", " choose · "),
            ("[1-9]", " quick pick · "),
            ("[?]", " help · "),
            ("[q]", " quit"),
        ],
        WizardStep::Review => &[
            ("[Enter]", " confirm · "),
            ("[Esc]", " back · "),
            ("[?]", " help · "),
            ("[q]", " quit"),
        ],
        WizardStep::Finished => &[],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in keys {
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(*label, Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;

    use super::*;
    use crate::app::PickerSettings;
    use crate::catalog::Catalog;
    use crate::wizard::WizardSelection;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(
            Arc::new(Catalog::builtin()),
            PickerSettings {
                advance_delay: Duration::from_millis(300),
                reselect_advances: true,
            },
            WizardSelection::default(),
            tx,
        )
    }

    #[test]
    fn test_help_popup_captures_clicks() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let card = app.interactions.regions()[0].bounds;
        assert_eq!(
            app.interactions.handle_click(card.x + 1, card.y + 1),
            Action::SelectReligion("hindu".into())
        );

        app.show_help = true;
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        assert_eq!(
            app.interactions.handle_click(card.x + 1, card.y + 1),
            Action::CloseHelp
        );
    }
}
