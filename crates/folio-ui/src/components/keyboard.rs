//! Global keyboard shortcuts.
//!
//! The handler never mutates the page itself; it yields intents the app
//! resolves, so the menu transition stays owned by the navigation component
//! and button activation re-enters dispatch as an ordinary click.

use crate::event::{Key, PageEvent};
use crate::page::{ElementId, Page};

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Escape: force-close the mobile menu
    CloseMenu,
    /// Enter/Space on a focused action button: activate it
    Activate(ElementId),
}

#[derive(Debug, Default)]
pub struct KeyboardNav;

impl KeyboardNav {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&mut self, page: &Page, event: &PageEvent) -> Option<KeyIntent> {
        let PageEvent::KeyDown { key } = event else {
            return None;
        };
        match key {
            Key::Escape => Some(KeyIntent::CloseMenu),
            Key::Enter | Key::Space => page
                .focused()
                .filter(|el| page.has_class(*el, "action-btn"))
                .map(KeyIntent::Activate),
            _ => None,
        }
    }
}
