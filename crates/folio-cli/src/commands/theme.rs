use anyhow::Result;
use clap::Subcommand;
use url::Url;

use folio_core::settings::{JsonFileSettings, SettingsStore};
use folio_core::AppConfig;
use folio_ui::page::{Page, Viewport};
use folio_ui::theme::{ThemeManager, THEME_KEY};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the persisted preference
    Get,
    /// Flip the preference and persist it
    Toggle,
}

pub fn run(action: ThemeAction) -> Result<()> {
    let store = JsonFileSettings::open(AppConfig::settings_path());

    match action {
        ThemeAction::Get => {
            println!("{}", store.get(THEME_KEY).unwrap_or_else(|| "dark".to_string()));
        }
        ThemeAction::Toggle => {
            // The manager applies the preference to a document; give it a
            // throwaway one, the persisted value is what we are after here
            let mut page = Page::new(
                "Folio",
                Url::parse("http://localhost/")?,
                Viewport {
                    width: 0.0,
                    height: 0.0,
                },
            );
            let mut manager = ThemeManager::new(Box::new(store));
            manager.toggle(&mut page);
            println!("{}", manager.mode().as_str());
        }
    }
    Ok(())
}
