//! In-memory page model.
//!
//! The behavior layer never talks to a real document; it mutates this model.
//! Elements carry the hooks the components key on: an optional id, marker
//! classes, a tag, attributes, vertical geometry, and the handful of style
//! fields the effects drive (translation, position, scale, visibility).
//!
//! Scrolling is owned here: components request targets and `tick_scroll`
//! advances the animation, so animated movement surfaces as ordinary scroll
//! offsets.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use url::Url;

use folio_core::ScrollConfig;

use crate::scroll::ScrollAnimator;

/// Handle to an element within its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Visible page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One element: identity hooks plus the style state the effects mutate
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attrs: HashMap<String, String>,
    text: String,
    offset_top: f64,
    height: f64,
    translate_y: f64,
    position: (f64, f64),
    scale: f64,
    visible: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: BTreeSet::new(),
            attrs: HashMap::new(),
            text: String::new(),
            offset_top: 0.0,
            height: 0.0,
            translate_y: 0.0,
            position: (0.0, 0.0),
            scale: 1.0,
            visible: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Vertical placement: offset from the document top and rendered height
    pub fn with_geometry(mut self, offset_top: f64, height: f64) -> Self {
        self.offset_top = offset_top;
        self.height = height;
        self
    }
}

/// The document the components operate on
pub struct Page {
    title: String,
    url: Url,
    viewport: Viewport,
    touch_capable: bool,
    elements: Vec<Element>,
    document_attrs: HashMap<String, String>,
    focused: Option<ElementId>,
    scroll: ScrollAnimator,
    content_height: f64,
    navigation_started: Instant,
}

impl Page {
    pub fn new(title: impl Into<String>, url: Url, viewport: Viewport) -> Self {
        Self {
            title: title.into(),
            url,
            viewport,
            touch_capable: false,
            elements: Vec::new(),
            document_attrs: HashMap::new(),
            focused: None,
            scroll: ScrollAnimator::default(),
            content_height: viewport.height,
            navigation_started: Instant::now(),
        }
    }

    /// Replace the scroll configuration (instant vs. animated scrolling)
    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroll = ScrollAnimator::new(config);
        self
    }

    pub fn with_touch_capable(mut self, touch: bool) -> Self {
        self.touch_capable = touch;
        self
    }

    /// Total scrollable document height
    pub fn with_content_height(mut self, height: f64) -> Self {
        self.content_height = height;
        self
    }

    // --- document state ---

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_touch_capable(&self) -> bool {
        self.touch_capable
    }

    /// Whether the page is served from a development host
    pub fn is_local_host(&self) -> bool {
        matches!(self.url.host_str(), Some("localhost") | Some("127.0.0.1"))
    }

    pub fn navigation_started(&self) -> Instant {
        self.navigation_started
    }

    pub fn set_document_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.document_attrs.insert(name.into(), value.into());
    }

    pub fn document_attr(&self, name: &str) -> Option<&str> {
        self.document_attrs.get(name).map(String::as_str)
    }

    pub fn focus(&mut self, target: Option<ElementId>) {
        self.focused = target;
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    // --- element tree ---

    /// Add an element, returning its handle
    pub fn append(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(ElementId)
    }

    pub fn select_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.contains(class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    pub fn select_tag(&self, tag: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tag == tag)
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// Page sections carrying an identifier
    pub fn sections(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tag == "section" && e.id.is_some())
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    // --- element access ---

    pub fn dom_id(&self, id: ElementId) -> Option<&str> {
        self.elements[id.0].id.as_deref()
    }

    pub fn tag(&self, id: ElementId) -> &str {
        &self.elements[id.0].tag
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attrs.get(name).map(String::as_str)
    }

    pub fn text(&self, id: ElementId) -> &str {
        &self.elements[id.0].text
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id.0].text = text.into();
    }

    pub fn offset_top(&self, id: ElementId) -> f64 {
        self.elements[id.0].offset_top
    }

    pub fn height(&self, id: ElementId) -> f64 {
        self.elements[id.0].height
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.0].classes.contains(class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.remove(class);
    }

    pub fn toggle_class(&mut self, id: ElementId, class: &str) {
        if !self.elements[id.0].classes.remove(class) {
            self.elements[id.0].classes.insert(class.to_string());
        }
    }

    pub fn translate_y(&self, id: ElementId) -> f64 {
        self.elements[id.0].translate_y
    }

    pub fn set_translate_y(&mut self, id: ElementId, offset: f64) {
        self.elements[id.0].translate_y = offset;
    }

    pub fn position(&self, id: ElementId) -> (f64, f64) {
        self.elements[id.0].position
    }

    pub fn set_position(&mut self, id: ElementId, x: f64, y: f64) {
        self.elements[id.0].position = (x, y);
    }

    pub fn scale(&self, id: ElementId) -> f64 {
        self.elements[id.0].scale
    }

    pub fn set_scale(&mut self, id: ElementId, scale: f64) {
        self.elements[id.0].scale = scale;
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.elements[id.0].visible
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        self.elements[id.0].visible = visible;
    }

    // --- scrolling ---

    pub fn scroll_y(&self) -> f64 {
        self.scroll.current()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    /// Jump to an offset immediately, cancelling any animated scroll
    pub fn set_scroll_y(&mut self, y: f64) {
        let max = self.max_scroll();
        self.scroll.set_scroll(y, max);
    }

    /// Request an animated scroll toward an absolute offset
    pub fn request_scroll_to(&mut self, y: f64) {
        let max = self.max_scroll();
        self.scroll.scroll_to(y, max);
    }

    /// Bring an element's top edge to the top of the viewport.
    ///
    /// This is the raw alignment primitive: unlike anchor scrolling it does
    /// not compensate for the fixed nav bar.
    pub fn scroll_into_view(&mut self, id: ElementId) {
        let top = self.offset_top(id);
        self.request_scroll_to(top);
    }

    pub fn is_scroll_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Advance an animated scroll one frame; `Some(y)` when the offset moved
    pub fn tick_scroll(&mut self) -> Option<f64> {
        if !self.scroll.is_animating() {
            return None;
        }
        let before = self.scroll.current();
        let max = self.max_scroll();
        let now = self.scroll.update(max);
        (now != before).then_some(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new(
            "Test",
            Url::parse("https://example.com/").unwrap(),
            Viewport {
                width: 1280.0,
                height: 800.0,
            },
        )
        .with_content_height(2000.0)
    }

    #[test]
    fn test_queries_by_id_class_and_tag() {
        let mut page = page();
        let nav = page.append(Element::new("nav").with_id("nav").with_class("nav"));
        let link = page.append(Element::new("a").with_class("nav-link"));
        page.append(Element::new("section").with_id("about"));

        assert_eq!(page.element_by_id("nav"), Some(nav));
        assert_eq!(page.element_by_id("missing"), None);
        assert_eq!(page.select_class("nav-link"), vec![link]);
        assert_eq!(page.sections().len(), 1);
    }

    #[test]
    fn test_class_markers_toggle() {
        let mut page = page();
        let el = page.append(Element::new("div"));

        page.toggle_class(el, "active");
        assert!(page.has_class(el, "active"));
        page.toggle_class(el, "active");
        assert!(!page.has_class(el, "active"));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut page = page();
        page.set_scroll_y(5000.0);
        assert_eq!(page.scroll_y(), 1200.0);
        page.set_scroll_y(-10.0);
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn test_local_host_detection() {
        let local = Page::new(
            "Dev",
            Url::parse("http://localhost:8080/").unwrap(),
            Viewport {
                width: 100.0,
                height: 100.0,
            },
        );
        assert!(local.is_local_host());
        assert!(!page().is_local_host());
    }
}
