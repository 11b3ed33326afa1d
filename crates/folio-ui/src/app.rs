//! Root composition: one instance of every behavior component, initialized
//! in a fixed order, with flat event dispatch.

use std::sync::Arc;

use tracing::{info, warn};

use folio_core::platform::Platform;
use folio_core::settings::SettingsStore;
use folio_core::AppConfig;

use crate::components::{
    Actions, CursorEffect, KeyIntent, KeyboardNav, Navigation, Parallax, PerfMonitor, Reveal,
    SmoothScroller, Toast,
};
use crate::event::PageEvent;
use crate::page::Page;
use crate::theme::ThemeManager;

/// Worker script registered for offline support
const OFFLINE_CACHE_SCRIPT: &str = "/sw.js";

pub struct App {
    page: Page,
    config: Arc<AppConfig>,
    platform: Platform,
    navigation: Navigation,
    scroller: SmoothScroller,
    reveal: Reveal,
    toast: Toast,
    actions: Actions,
    parallax: Parallax,
    keyboard: KeyboardNav,
    theme: ThemeManager,
    cursor: Option<CursorEffect>,
    monitor: Option<PerfMonitor>,
}

impl App {
    pub fn new(
        page: Page,
        config: Arc<AppConfig>,
        platform: Platform,
        settings: Box<dyn SettingsStore>,
    ) -> Self {
        Self {
            navigation: Navigation::new(&config.behavior),
            scroller: SmoothScroller::new(),
            reveal: Reveal::new(&config.behavior),
            toast: Toast::new(&config.behavior),
            actions: Actions::new(),
            parallax: Parallax::new(&config.behavior),
            keyboard: KeyboardNav::new(),
            theme: ThemeManager::new(settings),
            cursor: None,
            monitor: None,
            page,
            config,
            platform,
        }
    }

    /// Initialize every component against the page
    pub fn init(&mut self) {
        self.navigation.init(&mut self.page);
        self.scroller.init(&mut self.page);
        self.reveal.init(&mut self.page);
        self.toast.init(&mut self.page);
        self.actions.init(&mut self.page);
        self.parallax.init(&mut self.page);
        self.theme.init(&mut self.page);

        // Cursor follower only on wide, non-touch pages
        if CursorEffect::should_enable(&self.page, &self.config.behavior) {
            let mut cursor = CursorEffect::new();
            cursor.init(&mut self.page);
            self.cursor = Some(cursor);
        }

        // Load-time logging only on development hosts
        if self.page.is_local_host() {
            self.monitor = Some(PerfMonitor::new());
        }

        info!("Portfolio behavior initialized");
    }

    /// Route one environment event through every component
    pub fn dispatch(&mut self, event: &PageEvent) {
        self.navigation.handle(&mut self.page, event);
        self.scroller.handle(&mut self.page, event);
        self.reveal.handle(&mut self.page, event);
        self.actions
            .handle(&mut self.page, event, &mut self.toast, &mut self.platform);
        self.parallax.handle(event);
        if let Some(cursor) = &mut self.cursor {
            cursor.handle(&mut self.page, event);
        }
        if let Some(monitor) = &mut self.monitor {
            monitor.handle(&self.page, event);
        }

        if let Some(intent) = self.keyboard.handle(&self.page, event) {
            match intent {
                KeyIntent::CloseMenu => self.navigation.close_menu(&mut self.page),
                KeyIntent::Activate(target) => self.dispatch(&PageEvent::Click { target }),
            }
        }

        if matches!(event, PageEvent::Loaded) {
            self.register_offline_cache();
        }
    }

    /// Scroll as the user would: jump the offset and report the scroll event
    pub fn user_scroll(&mut self, y: f64) {
        self.page.set_scroll_y(y);
        let y = self.page.scroll_y();
        self.dispatch(&PageEvent::Scroll { y });
    }

    /// One animation frame: advance scrolling, expire toasts, apply parallax
    pub fn tick(&mut self) {
        if let Some(y) = self.page.tick_scroll() {
            self.dispatch(&PageEvent::Scroll { y });
        }
        self.toast.tick(&mut self.page);
        self.parallax.flush_frame(&mut self.page);
    }

    fn register_offline_cache(&mut self) {
        match self.platform.offline.register(OFFLINE_CACHE_SCRIPT) {
            Ok(()) => info!("Offline cache worker registered"),
            Err(e) => warn!("Offline cache registration failed: {}", e),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }
}
