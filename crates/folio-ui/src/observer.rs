//! Viewport-intersection watching.
//!
//! A watcher reports an element when the visible fraction of its box first
//! reaches the configured ratio, and again only after the element has left
//! the threshold and come back. The first evaluation after `observe` reports
//! elements that are already visible.

use crate::page::{ElementId, Page};

/// Rising-edge visibility watcher over a set of observed elements
#[derive(Debug)]
pub struct IntersectionWatcher {
    /// Minimum visible fraction of the element, in [0, 1]
    ratio: f64,
    /// Amount the viewport's bottom edge is pulled up before checks
    bottom_margin: f64,
    targets: Vec<(ElementId, bool)>,
}

impl IntersectionWatcher {
    pub fn new(ratio: f64, bottom_margin: f64) -> Self {
        Self {
            ratio,
            bottom_margin,
            targets: Vec::new(),
        }
    }

    /// Start watching an element
    pub fn observe(&mut self, id: ElementId) {
        if !self.targets.iter().any(|(t, _)| *t == id) {
            self.targets.push((id, false));
        }
    }

    pub fn observed(&self) -> usize {
        self.targets.len()
    }

    /// Elements that crossed into the threshold since the last call
    pub fn take_entries(&mut self, page: &Page) -> Vec<ElementId> {
        let top = page.scroll_y();
        let bottom = top + (page.viewport().height - self.bottom_margin).max(0.0);

        let mut fired = Vec::new();
        for (id, was_over) in &mut self.targets {
            let over = visible_fraction(page, *id, top, bottom) >= self.ratio;
            if over && !*was_over {
                fired.push(*id);
            }
            *was_over = over;
        }
        fired
    }
}

/// Fraction of the element's height inside [top, bottom]
fn visible_fraction(page: &Page, id: ElementId, top: f64, bottom: f64) -> f64 {
    let el_top = page.offset_top(id);
    let el_height = page.height(id);
    if el_height <= 0.0 {
        return 0.0;
    }
    let overlap = (el_top + el_height).min(bottom) - el_top.max(top);
    (overlap / el_height).clamp(0.0, 1.0)
}
