//! Desktop stand-ins for the browser capability surface: every call is
//! logged and succeeds, so a replay exercises the success paths.

use tracing::{debug, info};
use url::Url;

use folio_core::platform::{
    Clipboard, OfflineCache, Platform, PrintDialog, ShareOutcome, SharePlatform,
};

struct LogShare;

impl SharePlatform for LogShare {
    fn share(&mut self, title: &str, url: &Url) -> ShareOutcome {
        info!("Sharing '{}' ({})", title, url);
        ShareOutcome::Shared
    }
}

struct LogClipboard;

impl Clipboard for LogClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        info!("Copied to clipboard: {}", text);
        Ok(())
    }
}

struct LogPrinter;

impl PrintDialog for LogPrinter {
    fn open(&mut self) {
        info!("Print dialog requested");
    }
}

struct LogOffline;

impl OfflineCache for LogOffline {
    fn register(&mut self, script: &str) -> Result<(), String> {
        debug!("Offline cache script accepted: {}", script);
        Ok(())
    }
}

pub fn desktop() -> Platform {
    Platform {
        share: Box::new(LogShare),
        clipboard: Box::new(LogClipboard),
        printer: Box::new(LogPrinter),
        offline: Box::new(LogOffline),
    }
}
