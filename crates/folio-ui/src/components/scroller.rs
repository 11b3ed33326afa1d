//! In-page anchor scrolling and the hero scroll indicator.

use crate::event::PageEvent;
use crate::page::{ElementId, Page};

/// Section the scroll indicator jumps to
const INDICATOR_TARGET: &str = "resume";

pub struct SmoothScroller {
    indicator: Option<ElementId>,
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self { indicator: None }
    }

    pub fn init(&mut self, page: &mut Page) {
        self.indicator = page.select_class("scroll-indicator").first().copied();
    }

    pub fn handle(&mut self, page: &mut Page, event: &PageEvent) {
        let PageEvent::Click { target } = event else {
            return;
        };

        self.follow_anchor(page, *target);

        if Some(*target) == self.indicator {
            if let Some(section) = page.element_by_id(INDICATOR_TARGET) {
                // Raw top alignment, no nav-height compensation
                page.scroll_into_view(section);
            }
        }
    }

    /// Scroll to a same-page fragment target, offset by the nav bar height.
    /// Unresolvable fragments are silent no-ops.
    fn follow_anchor(&self, page: &mut Page, target: ElementId) {
        let Some(fragment) = page
            .attr(target, "href")
            .and_then(|href| href.strip_prefix('#'))
            .map(String::from)
        else {
            return;
        };
        let Some(section) = page.element_by_id(&fragment) else {
            return;
        };

        let nav_height = page
            .select_class("nav")
            .first()
            .map(|nav| page.height(*nav))
            .unwrap_or(0.0);
        let position = page.offset_top(section) - nav_height;
        page.request_scroll_to(position);
    }
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new()
    }
}
