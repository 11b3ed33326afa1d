//! Custom pointer follower for desktop, non-touch pages.

use folio_core::config::BehaviorConfig;

use crate::event::PageEvent;
use crate::page::{Element, ElementId, Page};

/// Scale applied while hovering an interactive element
const HOVER_SCALE: f64 = 1.5;

/// Marker carried by the follower while hovering
const HOVER_MARKER: &str = "cursor-hover";

pub struct CursorEffect {
    follower: Option<ElementId>,
}

impl CursorEffect {
    pub fn new() -> Self {
        Self { follower: None }
    }

    /// Desktop-only gate: wide viewport and no touch capability
    pub fn should_enable(page: &Page, config: &BehaviorConfig) -> bool {
        page.viewport().width > config.cursor_breakpoint && !page.is_touch_capable()
    }

    /// Append the hidden follower element to the page
    pub fn init(&mut self, page: &mut Page) {
        let follower = page.append(Element::new("div").with_class("custom-cursor"));
        page.set_visible(follower, false);
        self.follower = Some(follower);
    }

    pub fn handle(&mut self, page: &mut Page, event: &PageEvent) {
        let Some(follower) = self.follower else {
            return;
        };
        match event {
            PageEvent::PointerMove { x, y } => {
                page.set_visible(follower, true);
                page.set_position(follower, *x, *y);
            }
            PageEvent::PointerEnter { target } if is_interactive(page, *target) => {
                page.set_scale(follower, HOVER_SCALE);
                page.add_class(follower, HOVER_MARKER);
            }
            PageEvent::PointerLeave { target } if is_interactive(page, *target) => {
                page.set_scale(follower, 1.0);
                page.remove_class(follower, HOVER_MARKER);
            }
            PageEvent::PointerGone => {
                page.set_visible(follower, false);
            }
            _ => {}
        }
    }

    pub fn follower(&self) -> Option<ElementId> {
        self.follower
    }
}

impl Default for CursorEffect {
    fn default() -> Self {
        Self::new()
    }
}

fn is_interactive(page: &Page, id: ElementId) -> bool {
    page.tag(id) == "a" || page.tag(id) == "button" || page.has_class(id, "action-btn")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Viewport;
    use url::Url;

    fn desktop_page() -> Page {
        Page::new(
            "Test",
            Url::parse("https://example.com/").unwrap(),
            Viewport {
                width: 1280.0,
                height: 800.0,
            },
        )
    }

    #[test]
    fn test_enable_gate() {
        let config = BehaviorConfig::default();
        assert!(CursorEffect::should_enable(&desktop_page(), &config));

        let narrow = Page::new(
            "Narrow",
            Url::parse("https://example.com/").unwrap(),
            Viewport {
                width: 600.0,
                height: 800.0,
            },
        );
        assert!(!CursorEffect::should_enable(&narrow, &config));

        let touch = desktop_page().with_touch_capable(true);
        assert!(!CursorEffect::should_enable(&touch, &config));
    }

    #[test]
    fn test_follower_tracks_pointer() {
        let mut page = desktop_page();
        let mut cursor = CursorEffect::new();
        cursor.init(&mut page);
        let follower = cursor.follower().unwrap();

        assert!(!page.is_visible(follower));

        cursor.handle(&mut page, &PageEvent::PointerMove { x: 40.0, y: 60.0 });
        assert!(page.is_visible(follower));
        assert_eq!(page.position(follower), (40.0, 60.0));

        cursor.handle(&mut page, &PageEvent::PointerGone);
        assert!(!page.is_visible(follower));
    }

    #[test]
    fn test_enlarges_over_interactive_elements_only() {
        let mut page = desktop_page();
        let link = page.append(Element::new("a"));
        let plain = page.append(Element::new("div"));
        let mut cursor = CursorEffect::new();
        cursor.init(&mut page);
        let follower = cursor.follower().unwrap();

        cursor.handle(&mut page, &PageEvent::PointerEnter { target: plain });
        assert_eq!(page.scale(follower), 1.0);

        cursor.handle(&mut page, &PageEvent::PointerEnter { target: link });
        assert_eq!(page.scale(follower), HOVER_SCALE);
        assert!(page.has_class(follower, "cursor-hover"));

        cursor.handle(&mut page, &PageEvent::PointerLeave { target: link });
        assert_eq!(page.scale(follower), 1.0);
        assert!(!page.has_class(follower, "cursor-hover"));
    }
}
