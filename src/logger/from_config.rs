//! Logger families configured from TOML files.

use super::LoggerFactory;
use crate::config::ConfigPatch;
use crate::internal;
use std::path::Path;

impl LoggerFactory {
    /// Builds a family from `config.toml` in the platform config directory,
    /// or from `path` when given. A missing file means defaults.
    ///
    /// # Errors
    /// Fails on unreadable or malformed config, or when the file sink's
    /// directory cannot be created.
    pub fn from_config_file(path: Option<&Path>) -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger family from config file");
        let patch = match path {
            Some(path) => ConfigPatch::load_from(path)?,
            None => ConfigPatch::load()?,
        };
        Self::new(&patch)
    }

    /// Re-reads a TOML file and merges it into the running family.
    ///
    /// # Errors
    /// Same as [`ConfigPatch::load_from`] and [`LoggerFactory::reconfigure`].
    pub fn reconfigure_from_file(&self, path: &Path) -> Result<(), crate::Error> {
        let patch = ConfigPatch::load_from(path)?;
        self.reconfigure(&patch)
    }
}
