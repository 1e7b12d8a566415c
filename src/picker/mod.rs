//! Generic picker module
//!
//! Provides the keyboard-navigation trait shared by card pickers.

mod traits;

pub use traits::Picker;
