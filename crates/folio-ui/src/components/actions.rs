//! Print, share and download buttons.
//!
//! Feedback goes through the injected toast. Share prefers the native sheet
//! and falls back to copying the link; a user-cancelled share is not a
//! failure and produces no feedback at all.

use folio_core::platform::{Platform, ShareOutcome};

use crate::components::toast::Toast;
use crate::event::PageEvent;
use crate::page::{ElementId, Page};

pub struct Actions {
    print_btn: Option<ElementId>,
    share_btn: Option<ElementId>,
    download_btn: Option<ElementId>,
}

impl Actions {
    pub fn new() -> Self {
        Self {
            print_btn: None,
            share_btn: None,
            download_btn: None,
        }
    }

    pub fn init(&mut self, page: &mut Page) {
        self.print_btn = page.element_by_id("printBtn");
        self.share_btn = page.element_by_id("shareBtn");
        self.download_btn = page.select_class("download-btn").first().copied();
    }

    pub fn handle(
        &mut self,
        page: &mut Page,
        event: &PageEvent,
        toast: &mut Toast,
        platform: &mut Platform,
    ) {
        let PageEvent::Click { target } = event else {
            return;
        };

        if Some(*target) == self.print_btn {
            platform.printer.open();
            toast.show(page, "Opening print dialog...");
        } else if Some(*target) == self.share_btn {
            self.share(page, toast, platform);
        } else if Some(*target) == self.download_btn {
            // The transfer itself is a plain link action outside this layer
            toast.show(page, "Downloading resume...");
        }
    }

    fn share(&mut self, page: &mut Page, toast: &mut Toast, platform: &mut Platform) {
        let title = page.title().to_string();
        let url = page.url().clone();

        if platform.share.is_available() {
            match platform.share.share(&title, &url) {
                ShareOutcome::Shared => toast.show(page, "Shared successfully!"),
                ShareOutcome::Cancelled => {}
                ShareOutcome::Failed(_) => self.copy_link(page, toast, platform),
            }
        } else {
            self.copy_link(page, toast, platform);
        }
    }

    fn copy_link(&mut self, page: &mut Page, toast: &mut Toast, platform: &mut Platform) {
        if platform.clipboard.is_available() {
            let url = page.url().to_string();
            match platform.clipboard.write_text(&url) {
                Ok(()) => toast.show(page, "Link copied to clipboard!"),
                Err(_) => toast.show(page, "Unable to share"),
            }
        } else {
            toast.show(page, "Sharing not supported");
        }
    }
}

impl Default for Actions {
    fn default() -> Self {
        Self::new()
    }
}
