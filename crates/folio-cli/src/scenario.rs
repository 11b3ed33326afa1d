//! Scripted event timelines for the harness.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub title: String,
    pub steps: Vec<Step>,
}

/// One replayed browser event (or a pause)
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// The page finished loading
    Load,
    /// Scroll to an absolute offset
    Scroll { y: f64 },
    /// Click an element, located by id or by class (first match)
    Click {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        class: Option<String>,
    },
    /// Press a key: "escape", "enter", "space", or a single character
    Key { key: String },
    /// Move the pointer
    Pointer { x: f64, y: f64 },
    /// The pointer leaves the document
    PointerGone,
    /// Let time pass while frames keep ticking
    Wait { ms: u64 },
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Walkthrough replayed when no scenario file is given
    pub fn builtin() -> Self {
        Self {
            title: "Portfolio walkthrough".to_string(),
            steps: vec![
                Step::Load,
                Step::Pointer { x: 640.0, y: 300.0 },
                Step::Scroll { y: 250.0 },
                Step::Scroll { y: 150.0 },
                Step::Click {
                    id: None,
                    class: Some("scroll-indicator".to_string()),
                },
                Step::Wait { ms: 500 },
                Step::Click {
                    id: Some("shareBtn".to_string()),
                    class: None,
                },
                Step::Wait { ms: 400 },
                Step::Click {
                    id: Some("menuToggle".to_string()),
                    class: None,
                },
                Step::Key {
                    key: "escape".to_string(),
                },
                Step::PointerGone,
            ],
        }
    }
}
