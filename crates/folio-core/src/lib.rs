pub mod config;
pub mod error;
pub mod platform;
pub mod settings;
pub mod validate;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use platform::ShareOutcome;
pub use settings::SettingsStore;
