//! Component-level mouse interactivity system.
//!
//! Components register their clickable regions during render, and mouse
//! events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a card:
//! registry.register(InteractiveRegion::clickable(
//!     "religion_card",
//!     ClickRegion::new(x, y, width, height),
//!     Action::SelectReligion("sikh".into()),
//! ));
//!
//! // Mouse events are automatically dispatched to matching regions
//! ```

use ratatui::layout::Rect;

use crate::events::Action;
use crate::log;

/// A rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside (right and bottom edges excluded)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse clicks.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first)
    /// Use this for popups that should capture clicks over underlying content
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register the card for a religion option
    pub fn register_religion_card(&mut self, id: &str, bounds: ClickRegion) {
        self.register(InteractiveRegion::clickable(
            "religion_card",
            bounds,
            Action::SelectReligion(id.to_string()),
        ));
    }

    #[allow(dead_code)]
    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// The highest-priority region containing (x, y)
    pub fn region_at(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.region_at(x, y) {
            Some(region) => {
                log::log_event(&format!("click ({}, {}) on {}", x, y, region.id));
                region.on_click.clone()
            }
            None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::Back,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::CloseHelp,
            )
            .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert!(matches!(registry.handle_click(50, 50), Action::CloseHelp));

        // Click outside popup should return background's action
        assert!(matches!(registry.handle_click(5, 5), Action::Back));

        assert_eq!(registry.region_at(50, 50).map(|r| r.id), Some("popup"));
        assert_eq!(registry.region_at(5, 5).map(|r| r.id), Some("background"));
        assert!(registry.region_at(150, 150).is_none());
    }

    #[test]
    fn test_religion_card_click() {
        let mut registry = InteractionRegistry::new();
        registry.register_religion_card("sikh", ClickRegion::new(0, 0, 10, 5));
        assert!(matches!(
            registry.handle_click(3, 3),
            Action::SelectReligion(ref id) if id == "sikh"
        ));
        assert!(matches!(registry.handle_click(11, 3), Action::None));
    }
}
