//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are mapped to [`Action`]s, which the App applies.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
