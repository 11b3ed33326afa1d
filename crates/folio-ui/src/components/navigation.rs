//! Top navigation bar: scroll-direction hide/show, active-link tracking,
//! and the mobile menu.

use folio_core::config::BehaviorConfig;

use crate::event::PageEvent;
use crate::observer::IntersectionWatcher;
use crate::page::{ElementId, Page};

/// Mobile menu state, mirrored onto the toggle and the links container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

pub struct Navigation {
    nav: Option<ElementId>,
    links: Vec<ElementId>,
    toggle: Option<ElementId>,
    container: Option<ElementId>,
    last_scroll: f64,
    menu: MenuState,
    threshold: f64,
    sections: IntersectionWatcher,
}

impl Navigation {
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            nav: None,
            links: Vec::new(),
            toggle: None,
            container: None,
            last_scroll: 0.0,
            menu: MenuState::Closed,
            threshold: config.nav_scroll_threshold,
            sections: IntersectionWatcher::new(config.section_visible_ratio, 0.0),
        }
    }

    /// Bind to the page and report sections already in view
    pub fn init(&mut self, page: &mut Page) {
        self.nav = page.element_by_id("nav");
        self.links = page.select_class("nav-link");
        self.toggle = page.element_by_id("menuToggle");
        self.container = page.select_class("nav-links").first().copied();
        self.last_scroll = page.scroll_y();

        for section in page.sections() {
            self.sections.observe(section);
        }
        self.refresh_active_link(page);
    }

    pub fn handle(&mut self, page: &mut Page, event: &PageEvent) {
        match event {
            PageEvent::Scroll { y } => {
                self.on_scroll(page, *y);
                self.refresh_active_link(page);
            }
            PageEvent::Click { target } => {
                if Some(*target) == self.toggle {
                    self.toggle_menu(page);
                } else if self.links.contains(target) {
                    // Any nav-link click closes the menu, open or not
                    self.close_menu(page);
                }
            }
            _ => {}
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    /// Open ⇄ closed transition from the toggle control
    pub fn toggle_menu(&mut self, page: &mut Page) {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.sync_menu_markers(page);
    }

    /// Force-close transition; idempotent
    pub fn close_menu(&mut self, page: &mut Page) {
        self.menu = MenuState::Closed;
        self.sync_menu_markers(page);
    }

    fn sync_menu_markers(&self, page: &mut Page) {
        let open = self.menu == MenuState::Open;
        for el in [self.toggle, self.container].into_iter().flatten() {
            if open {
                page.add_class(el, "active");
            } else {
                page.remove_class(el, "active");
            }
        }
    }

    /// Hide when scrolling down past the threshold, show when scrolling up.
    /// Below the threshold visibility is left as-is; the last offset is
    /// recorded on every event.
    fn on_scroll(&mut self, page: &mut Page, current: f64) {
        if let Some(nav) = self.nav {
            if current > self.threshold {
                if current > self.last_scroll {
                    page.add_class(nav, "hide");
                } else {
                    page.remove_class(nav, "hide");
                }
            }
        }
        self.last_scroll = current;
    }

    fn refresh_active_link(&mut self, page: &mut Page) {
        for section in self.sections.take_entries(page) {
            let Some(section_id) = page.dom_id(section).map(String::from) else {
                continue;
            };
            let fragment = format!("#{}", section_id);
            for link in &self.links {
                page.remove_class(*link, "active");
                if page.attr(*link, "href") == Some(fragment.as_str()) {
                    page.add_class(*link, "active");
                }
            }
        }
    }
}
