//! Fade-in reveals for content blocks entering the viewport.

use folio_core::config::BehaviorConfig;

use crate::event::PageEvent;
use crate::observer::IntersectionWatcher;
use crate::page::Page;

/// Marker added to revealed blocks; never removed
const REVEAL_MARKER: &str = "fade-in";

/// Content blocks that participate in the reveal
const REVEAL_CLASSES: [&str; 3] = ["section-header", "resume-viewer", "contact-card"];

pub struct Reveal {
    watcher: IntersectionWatcher,
}

impl Reveal {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            watcher: IntersectionWatcher::new(
                config.reveal_visible_ratio,
                config.reveal_bottom_margin,
            ),
        }
    }

    pub fn init(&mut self, page: &mut Page) {
        for class in REVEAL_CLASSES {
            for el in page.select_class(class) {
                self.watcher.observe(el);
            }
        }
        self.refresh(page);
    }

    pub fn handle(&mut self, page: &mut Page, event: &PageEvent) {
        if matches!(event, PageEvent::Scroll { .. }) {
            self.refresh(page);
        }
    }

    fn refresh(&mut self, page: &mut Page) {
        for el in self.watcher.take_entries(page) {
            page.add_class(el, REVEAL_MARKER);
        }
    }
}
