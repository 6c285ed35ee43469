use anyhow::Context;
use serde::Deserialize;
use std::io::ErrorKind;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Startup configuration read from `settings.json`.
///
/// Every field is optional in the file; anything left out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    /// Enables `debug` level logging and lets `RUST_LOG` override the filter.
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "MUpainter".into(),
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Loads settings from `path`. A missing or empty file yields defaults;
    /// an unreadable file or malformed JSON is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("read settings from {path}"));
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings from {path}"))?;
        if settings.window_title.trim().is_empty() {
            tracing::warn!("empty window title in {path}; using default");
            settings.window_title = Self::default().window_title;
        }
        Ok(settings)
    }
}
