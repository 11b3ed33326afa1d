//! Load-time logging for development hosts.

use tracing::info;

use crate::event::PageEvent;
use crate::page::Page;

/// Logs elapsed time from navigation start once the page reports loaded.
/// The app constructs one only for local development hosts.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    logged: bool,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, page: &Page, event: &PageEvent) {
        if self.logged || !matches!(event, PageEvent::Loaded) {
            return;
        }
        self.logged = true;
        let load_ms = page.navigation_started().elapsed().as_millis();
        info!("Page load time: {}ms", load_ms);
    }
}
