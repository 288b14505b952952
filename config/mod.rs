/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Tab strip settings and the loaders shared by settings and snapshots.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Named settings the tab strip consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Tint tabs with the page theme color.
    PaintTabs,
    /// Report frame lookups that miss through the `log` facade.
    LogMissingFrames,
}

impl SettingKey {
    pub const PAINT_TABS: SettingKey = SettingKey::PaintTabs;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaintTabs => "tabs.paint-tabs",
            Self::LogMissingFrames => "diagnostics.log-missing-frames",
        }
    }
}

/// Read-only settings snapshot.
///
/// On disk this is a TOML document; every key is optional:
///
/// ```toml
/// [tabs]
/// paint-tabs = true
///
/// [diagnostics]
/// log-missing-frames = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripSettings {
    pub tabs: TabSettings,
    pub diagnostics: DiagnosticsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TabSettings {
    pub paint_tabs: bool,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self { paint_tabs: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiagnosticsSettings {
    pub log_missing_frames: bool,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            log_missing_frames: true,
        }
    }
}

impl TabStripSettings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::PaintTabs => self.tabs.paint_tabs,
            SettingKey::LogMissingFrames => self.diagnostics.log_missing_frames,
        }
    }

    pub fn paint_tabs(&self) -> bool {
        self.get(SettingKey::PAINT_TABS)
    }

    pub fn with_paint_tabs(mut self, enabled: bool) -> Self {
        self.tabs.paint_tabs = enabled;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Toml(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Errors from loading settings or snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Toml(String),
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(f, "IO error reading {path}: {message}"),
            ConfigError::Toml(e) => write!(f, "TOML error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
