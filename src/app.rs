use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::deferred::AdvanceTicket;
use crate::events::Action;
use crate::log;
use crate::picker::Picker;
use crate::tui::interaction::InteractionRegistry;
use crate::wizard::{ReligionPicker, SelectionHost, Wizard, WizardSelection, WizardStep};

/// How the religion step behaves after a selection
#[derive(Debug, Clone, Copy)]
pub struct PickerSettings {
    pub advance_delay: Duration,
    pub reselect_advances: bool,
}

pub struct App {
    pub wizard: Wizard,
    /// Mounted only while the wizard is on the religion step
    pub picker: Option<ReligionPicker>,
    pub interactions: InteractionRegistry,
    pub show_help: bool,
    pub should_quit: bool,
    catalog: Arc<Catalog>,
    settings: PickerSettings,
    advance_tx: mpsc::UnboundedSender<AdvanceTicket>,
}

impl App {
    pub fn new(
        catalog: Arc<Catalog>,
        settings: PickerSettings,
        selection: WizardSelection,
        advance_tx: mpsc::UnboundedSender<AdvanceTicket>,
    ) -> Self {
        let mut app = Self {
            wizard: Wizard::new(selection),
            picker: None,
            interactions: InteractionRegistry::new(),
            show_help: false,
            should_quit: false,
            catalog,
            settings,
            advance_tx,
        };
        app.sync_picker();
        app
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Display name of the chosen religion, if it has a record.
    pub fn selected_name(&self) -> Option<&str> {
        self.wizard
            .selected_religion()
            .and_then(|id| self.catalog.display_name(id))
    }

    /// Mount the picker on the religion step and drop it (cancelling any
    /// pending advance) everywhere else.
    fn sync_picker(&mut self) {
        match (self.wizard.step(), self.picker.is_some()) {
            (WizardStep::Religion, false) => {
                let picker = ReligionPicker::new(
                    Arc::clone(&self.catalog),
                    self.wizard.selected_religion(),
                    self.settings.advance_delay,
                    self.advance_tx.clone(),
                )
                .with_reselect_advances(self.settings.reselect_advances);
                self.picker = Some(picker);
                log::log_event("religion picker mounted");
            }
            (WizardStep::Religion, true) => {}
            (_, true) => {
                self.picker = None;
                log::log_event("religion picker unmounted");
            }
            (_, false) => {}
        }
    }

    /// Apply an action dispatched by the event handlers.
    pub fn apply(&mut self, action: Action) {
        if action != Action::None {
            log::log_event(&format!("action {:?}", action));
        }

        let current = self.wizard.selected_religion().map(str::to_owned);

        match action {
            Action::Quit => {
                if self.picker.as_ref().is_some_and(|p| p.advance_pending()) {
                    log::log_event("quitting with an advance pending");
                }
                self.should_quit = true;
            }
            Action::OpenHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::CursorNext => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.cursor_next();
                }
            }
            Action::CursorPrev => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.cursor_prev();
                }
            }
            Action::CursorUp => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.cursor_up();
                }
            }
            Action::CursorDown => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.cursor_down();
                }
            }
            Action::SelectHighlighted => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.select_highlighted(current.as_deref(), &mut self.wizard);
                }
            }
            Action::SelectNumber(number) => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.select_number(number, current.as_deref(), &mut self.wizard);
                }
            }
            Action::SelectReligion(id) => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.select(&id, current.as_deref(), &mut self.wizard);
                }
            }
            Action::Back => {
                self.wizard.back();
            }
            Action::Finish => {
                if self.wizard.step() == WizardStep::Review {
                    self.wizard.on_next();
                    self.should_quit = true;
                }
            }
            Action::None => {}
        }

        self.sync_picker();
    }

    /// A deferred advance fired.
    pub fn on_advance(&mut self, ticket: AdvanceTicket) {
        match self.picker.as_mut() {
            Some(picker) => {
                picker.on_advance(ticket, &mut self.wizard);
            }
            None => log::log_event(&format!("advance {:?} arrived after unmount", ticket)),
        }
        self.sync_picker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(
        selection: WizardSelection,
    ) -> (App, mpsc::UnboundedReceiver<AdvanceTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let settings = PickerSettings {
            advance_delay: Duration::from_millis(300),
            reselect_advances: true,
        };
        let app = App::new(Arc::new(Catalog::builtin()), settings, selection, tx);
        (app, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_then_advance_to_review() {
        let (mut app, mut rx) = app_with(WizardSelection::default());

        app.apply(Action::SelectReligion("muslim".into()));
        assert_eq!(app.wizard.selected_religion(), Some("muslim"));
        assert_eq!(app.wizard.step(), WizardStep::Religion);
        assert_eq!(app.selected_name(), Some("Muslim"));

        let ticket = rx.recv().await.unwrap();
        app.on_advance(ticket);
        assert_eq!(app.wizard.step(), WizardStep::Review);
        assert!(app.picker.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_remounts_with_cursor_on_choice() {
        let (mut app, mut rx) = app_with(WizardSelection::default());

        app.apply(Action::SelectNumber(4));
        let ticket = rx.recv().await.unwrap();
        app.on_advance(ticket);

        app.apply(Action::Back);
        assert_eq!(app.wizard.step(), WizardStep::Religion);
        let picker = app.picker.as_ref().unwrap();
        assert_eq!(picker.highlighted().map(|r| r.id.as_str()), Some("jain"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_from_review() {
        let (mut app, mut rx) = app_with(WizardSelection::default());

        app.apply(Action::SelectReligion("sikh".into()));
        // Finish is only valid on the review step
        app.apply(Action::Finish);
        assert!(!app.should_quit);

        let ticket = rx.recv().await.unwrap();
        app.on_advance(ticket);
        app.apply(Action::Finish);
        assert!(app.wizard.is_finished());
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticket_after_unmount_is_ignored() {
        let (mut app, mut rx) = app_with(WizardSelection::default());

        app.apply(Action::SelectReligion("hindu".into()));
        let ticket = rx.recv().await.unwrap();
        app.on_advance(ticket);
        assert_eq!(app.wizard.step(), WizardStep::Review);

        // Delivering the same ticket again must not advance past review
        app.on_advance(ticket);
        assert_eq!(app.wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_unknown_preselection_has_no_name() {
        let (app, _rx) = app_with(WizardSelection {
            religion: Some("zoroastrian".into()),
        });
        assert_eq!(app.selected_name(), None);
        let picker = app.picker.as_ref().unwrap();
        assert_eq!(picker.cursor(), 0);
    }

    #[test]
    fn test_help_toggles() {
        let (mut app, _rx) = app_with(WizardSelection::default());
        app.apply(Action::OpenHelp);
        assert!(app.show_help);
        app.apply(Action::CloseHelp);
        assert!(!app.show_help);
    }
}
