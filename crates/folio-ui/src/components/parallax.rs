//! Parallax translation of the hero background, throttled to one update per
//! animation frame.

use folio_core::config::BehaviorConfig;

use crate::event::PageEvent;
use crate::page::{ElementId, Page};

pub struct Parallax {
    layer: Option<ElementId>,
    factor: f64,
    frame_pending: bool,
}

impl Parallax {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            layer: None,
            factor: config.parallax_factor,
            frame_pending: false,
        }
    }

    /// Bind to the background layer; without one the component stays inert
    pub fn init(&mut self, page: &mut Page) {
        self.layer = page.select_class("hero-background").first().copied();
    }

    pub fn handle(&mut self, event: &PageEvent) {
        if self.layer.is_some() && matches!(event, PageEvent::Scroll { .. }) {
            self.frame_pending = true;
        }
    }

    /// Apply at most one translation per frame, reading the offset at apply
    /// time so the latest scroll position wins
    pub fn flush_frame(&mut self, page: &mut Page) {
        if !self.frame_pending {
            return;
        }
        self.frame_pending = false;
        if let Some(layer) = self.layer {
            page.set_translate_y(layer, page.scroll_y() * self.factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Element, Viewport};
    use url::Url;

    fn page_with_hero() -> Page {
        let mut page = Page::new(
            "Test",
            Url::parse("https://example.com/").unwrap(),
            Viewport {
                width: 1280.0,
                height: 800.0,
            },
        )
        .with_content_height(4000.0);
        page.append(Element::new("div").with_class("hero-background"));
        page
    }

    #[test]
    fn test_half_speed_translation() {
        let mut page = page_with_hero();
        let mut parallax = Parallax::new(&BehaviorConfig::default());
        parallax.init(&mut page);
        let layer = page.select_class("hero-background")[0];

        page.set_scroll_y(200.0);
        parallax.handle(&PageEvent::Scroll { y: 200.0 });
        parallax.flush_frame(&mut page);
        assert_eq!(page.translate_y(layer), 100.0);
    }

    #[test]
    fn test_one_update_per_frame_latest_offset_wins() {
        let mut page = page_with_hero();
        let mut parallax = Parallax::new(&BehaviorConfig::default());
        parallax.init(&mut page);
        let layer = page.select_class("hero-background")[0];

        parallax.handle(&PageEvent::Scroll { y: 50.0 });
        page.set_scroll_y(300.0);
        parallax.handle(&PageEvent::Scroll { y: 300.0 });

        parallax.flush_frame(&mut page);
        assert_eq!(page.translate_y(layer), 150.0);

        // No further scroll events: the next frame applies nothing
        page.set_scroll_y(600.0);
        parallax.flush_frame(&mut page);
        assert_eq!(page.translate_y(layer), 150.0);
    }

    #[test]
    fn test_inert_without_layer() {
        let mut page = Page::new(
            "Bare",
            Url::parse("https://example.com/").unwrap(),
            Viewport {
                width: 100.0,
                height: 100.0,
            },
        );
        let mut parallax = Parallax::new(&BehaviorConfig::default());
        parallax.init(&mut page);
        parallax.handle(&PageEvent::Scroll { y: 100.0 });
        parallax.flush_frame(&mut page);
    }
}
