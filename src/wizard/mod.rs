//! Wizard container.
//!
//! The wizard owns the user's choices and the step sequence. Step components
//! never keep their own copy of a choice; they report it through
//! [`SelectionHost`] and read it back from the wizard when rendering.

mod religion_picker;

use serde::Serialize;

use crate::log;

pub use religion_picker::ReligionPicker;

/// Callbacks a selection step reports to.
pub trait SelectionHost {
    /// The user chose `id`.
    fn on_select(&mut self, id: &str);

    /// The step is done; move to the next one.
    fn on_next(&mut self);
}

/// Steps of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Religion,
    Review,
    Finished,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            WizardStep::Religion => WizardStep::Review,
            WizardStep::Review | WizardStep::Finished => WizardStep::Finished,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WizardStep::Religion | WizardStep::Review => WizardStep::Religion,
            WizardStep::Finished => WizardStep::Review,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Religion => "Religion",
            WizardStep::Review => "Review",
            WizardStep::Finished => "Done",
        }
    }
}

/// Everything the user has chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardSelection {
    pub religion: Option<String>,
}

/// Selection state and step sequencing.
#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    selection: WizardSelection,
}

impl Wizard {
    pub fn new(selection: WizardSelection) -> Self {
        Self {
            step: WizardStep::Religion,
            selection,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &WizardSelection {
        &self.selection
    }

    pub fn selected_religion(&self) -> Option<&str> {
        self.selection.religion.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.step == WizardStep::Finished
    }

    /// Go back one step. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        let prev = self.step.prev();
        if prev == self.step {
            return false;
        }
        log::log_event(&format!("step {:?} -> {:?}", self.step, prev));
        self.step = prev;
        true
    }
}

impl SelectionHost for Wizard {
    fn on_select(&mut self, id: &str) {
        log::log_event(&format!("religion selected: {}", id));
        self.selection.religion = Some(id.to_string());
    }

    fn on_next(&mut self) {
        let next = self.step.next();
        log::log_event(&format!("step {:?} -> {:?}", self.step, next));
        self.step = next;
    }
}
