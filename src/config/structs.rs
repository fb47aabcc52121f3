//! Configuration struct definitions.
//!
//! `Config` is the effective state; the `*Patch` types are the partial
//! payloads accepted at construction and by `reconfigure`, where an absent
//! field means "keep what is there".

use crate::level::Threshold;
use serde::Deserialize;

/// Application name used for the default file path.
pub const DEFAULT_APP: &str = "prefixlog";

/// Console sink settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    /// Console output is off until explicitly enabled.
    pub enabled: bool,
    pub level: Threshold,
}

/// File sink settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub enabled: bool,
    pub level: Threshold,
    /// Target log file; its parent directory is created on demand.
    pub path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::for_app(DEFAULT_APP)
    }
}

impl FileConfig {
    #[must_use]
    pub fn for_app(app: &str) -> Self {
        Self {
            enabled: false,
            level: Threshold::default(),
            path: format!("logs/{app}.log"),
        }
    }
}

/// Partial console settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConsolePatch {
    pub enabled: Option<bool>,
    pub level: Option<Threshold>,
}

/// Partial file settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FilePatch {
    pub enabled: Option<bool>,
    pub level: Option<Threshold>,
    pub path: Option<String>,
}

/// A partial configuration. Every field is optional, so an empty TOML file
/// or `ConfigPatch::default()` changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub console: ConsolePatch,
    pub file: FilePatch,
    pub replicants: Option<bool>,
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn console_enabled(mut self, enabled: bool) -> Self {
        self.console.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn console_level(mut self, level: impl Into<Threshold>) -> Self {
        self.console.level = Some(level.into());
        self
    }

    #[must_use]
    pub const fn file_enabled(mut self, enabled: bool) -> Self {
        self.file.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn file_level(mut self, level: impl Into<Threshold>) -> Self {
        self.file.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.file.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn replicants(mut self, enabled: bool) -> Self {
        self.replicants = Some(enabled);
        self
    }

    /// Layers `other` on top of `self`: fields present in `other` win.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        if other.console.enabled.is_some() {
            self.console.enabled = other.console.enabled;
        }
        if other.console.level.is_some() {
            self.console.level.clone_from(&other.console.level);
        }
        if other.file.enabled.is_some() {
            self.file.enabled = other.file.enabled;
        }
        if other.file.level.is_some() {
            self.file.level.clone_from(&other.file.level);
        }
        if other.file.path.is_some() {
            self.file.path.clone_from(&other.file.path);
        }
        if other.replicants.is_some() {
            self.replicants = other.replicants;
        }
        self
    }
}
