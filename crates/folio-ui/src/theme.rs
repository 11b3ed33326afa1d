//! Light/dark theme preference.
//!
//! The preference is durable page state: read from the injected settings
//! store at construction, applied as a document attribute, written back on
//! toggle. No page control invokes `toggle` today; it stays a callable
//! capability for whoever embeds the layer.

use folio_core::settings::SettingsStore;

use crate::page::Page;

/// Settings-store key the preference persists under
pub const THEME_KEY: &str = "theme";

/// Document attribute carrying the active theme
pub const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub struct ThemeManager {
    mode: ThemeMode,
    store: Box<dyn SettingsStore>,
}

impl ThemeManager {
    /// Read the persisted preference; unset or unrecognized values mean dark
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        let mode = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or(ThemeMode::Dark);
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply the current preference to the document
    pub fn init(&self, page: &mut Page) {
        page.set_document_attr(THEME_ATTR, self.mode.as_str());
    }

    /// Flip the preference, reapply it, and persist the new value
    pub fn toggle(&mut self, page: &mut Page) {
        self.mode = self.mode.flipped();
        page.set_document_attr(THEME_ATTR, self.mode.as_str());
        self.store.set(THEME_KEY, self.mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Viewport;
    use folio_core::settings::MemorySettings;
    use url::Url;

    fn page() -> Page {
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
    fn test_defaults_to_dark() {
        let manager = ThemeManager::new(Box::new(MemorySettings::new()));
        assert_eq!(manager.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_init_applies_document_attr() {
        let mut page = page();
        let manager = ThemeManager::new(Box::new(MemorySettings::new()));
        manager.init(&mut page);
        assert_eq!(page.document_attr(THEME_ATTR), Some("dark"));
    }

    #[test]
    fn test_toggle_persists_across_reconstruction() {
        let store = MemorySettings::new();
        let mut page = page();

        let mut manager = ThemeManager::new(Box::new(store.clone()));
        manager.toggle(&mut page);
        assert_eq!(manager.mode(), ThemeMode::Light);
        assert_eq!(page.document_attr(THEME_ATTR), Some("light"));

        let reloaded = ThemeManager::new(Box::new(store));
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unrecognized_value_falls_back_to_dark() {
        let mut store = MemorySettings::new();
        store.set(THEME_KEY, "solarized");
        let manager = ThemeManager::new(Box::new(store));
        assert_eq!(manager.mode(), ThemeMode::Dark);
    }
}
