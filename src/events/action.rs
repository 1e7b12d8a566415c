//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged and applied by the App.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit without finishing the wizard
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Religion cards ===
    /// Highlight the next card
    CursorNext,
    /// Highlight the previous card
    CursorPrev,
    /// Highlight the card one row up
    CursorUp,
    /// Highlight the card one row down
    CursorDown,
    /// Choose the highlighted card
    SelectHighlighted,
    /// Choose the card with this number (1-based)
    SelectNumber(usize),
    /// Choose a religion by id (mouse click on a card)
    SelectReligion(String),

    // === Wizard ===
    /// Return to the previous step
    Back,
    /// Complete the wizard from the review step
    Finish,

    /// No action
    None,
}
