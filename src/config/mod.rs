//! Effective configuration, the partial merge applied by `reconfigure`, and
//! TOML loading of patches.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! default locations) stays independent of the serde schema.

mod structs;

pub use structs::{ConfigPatch, ConsoleConfig, ConsolePatch, DEFAULT_APP, FileConfig, FilePatch};

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Shared state of a logger family. Defaults: console and file disabled at
/// `info`, file at `logs/prefixlog.log`, replicant logging off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// Gates the `replicants` method independently of any level.
    pub replicants: bool,
}

impl Config {
    /// Defaults with the file sink pointed at `logs/<app>.log`.
    #[must_use]
    pub fn for_app(app: &str) -> Self {
        Self {
            file: FileConfig::for_app(app),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `patch`.
    #[must_use]
    pub fn from_patch(patch: &ConfigPatch) -> Self {
        let mut config = Self::default();
        config.apply(patch);
        config
    }

    /// Partial merge: only fields present in `patch` are overwritten.
    /// Applying the same patch twice is the same as applying it once.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(enabled) = patch.console.enabled {
            self.console.enabled = enabled;
        }
        if let Some(level) = &patch.console.level {
            self.console.level.clone_from(level);
        }
        if let Some(enabled) = patch.file.enabled {
            self.file.enabled = enabled;
        }
        if let Some(level) = &patch.file.level {
            self.file.level.clone_from(level);
        }
        if let Some(path) = &patch.file.path {
            self.file.path.clone_from(path);
        }
        if let Some(replicants) = patch.replicants {
            self.replicants = replicants;
        }
    }

    /// The file sink path with a leading `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        expand_path(&self.file.path)
    }
}

impl ConfigPatch {
    /// Parses a patch from TOML text. Unknown level names are kept and silence the sink.
    ///
    /// # Errors
    /// Returns an error on TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a patch from an explicit path; a missing file is an empty patch.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let patch = Self::from_toml(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(patch)
    }

    /// Loads `config.toml` from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&default_config_path()?)
    }
}

/// `<platform config dir>/prefixlog/config.toml`.
///
/// # Errors
/// Returns `ConfigDirNotFound` when no home directory can be resolved.
pub fn default_config_path() -> Result<PathBuf, crate::Error> {
    directories::ProjectDirs::from("", "", DEFAULT_APP)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(crate::Error::ConfigDirNotFound)
}

/// Expands a leading `~`; paths that cannot be expanded are used as written.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
