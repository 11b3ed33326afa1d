//! Transient toast notification.

use std::time::{Duration, Instant};

use folio_core::config::BehaviorConfig;

use crate::page::{ElementId, Page};

/// Visibility marker on the toast element
const SHOW_MARKER: &str = "show";

/// Single toast display: latest message wins, visibility auto-expires.
///
/// Every `show` arms its own hide deadline and none is ever cancelled, so a
/// deadline armed by an earlier, shorter call can clear the marker while a
/// later message is still current.
pub struct Toast {
    element: Option<ElementId>,
    default_duration: Duration,
    hide_deadlines: Vec<Instant>,
}

impl Toast {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            element: None,
            default_duration: Duration::from_millis(config.toast_duration_ms),
            hide_deadlines: Vec::new(),
        }
    }

    pub fn init(&mut self, page: &mut Page) {
        self.element = page.element_by_id("toast");
    }

    /// Show a message for the configured duration
    pub fn show(&mut self, page: &mut Page, message: &str) {
        self.show_for(page, message, self.default_duration);
    }

    /// Show a message for an explicit duration
    pub fn show_for(&mut self, page: &mut Page, message: &str, duration: Duration) {
        let Some(el) = self.element else {
            return;
        };
        page.set_text(el, message);
        page.add_class(el, SHOW_MARKER);
        self.hide_deadlines.push(Instant::now() + duration);
    }

    /// Expire elapsed hide deadlines
    pub fn tick(&mut self, page: &mut Page) {
        let now = Instant::now();
        if !self.hide_deadlines.iter().any(|d| *d <= now) {
            return;
        }
        self.hide_deadlines.retain(|d| *d > now);
        if let Some(el) = self.element {
            page.remove_class(el, SHOW_MARKER);
        }
    }
}
