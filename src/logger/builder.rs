//! Stepwise construction of a [`LoggerFactory`]: initial patch, optional
//! reporter, and console presentation.

use super::backend::Backend;
use super::{LoggerFactory, Shared};
use crate::config::{Config, ConfigPatch, DEFAULT_APP};
use crate::fmt::LevelColors;
use crate::internal;
use crate::output::{ConsoleOutput, Output};
use crate::report::{ReportContext, Reporter, SERVER_LOGGER_LABEL};
use std::sync::{Arc, RwLock};

pub struct LoggerFactoryBuilder {
    app: String,
    patch: ConfigPatch,
    reporter: Option<Box<dyn Reporter>>,
    report_label: String,
    console: Option<Box<dyn Output>>,
    colors: bool,
    level_colors: LevelColors,
    timestamps: bool,
}

impl Default for LoggerFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactoryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: DEFAULT_APP.to_string(),
            patch: ConfigPatch::default(),
            reporter: None,
            report_label: SERVER_LOGGER_LABEL.to_string(),
            console: None,
            colors: true,
            level_colors: LevelColors::default(),
            timestamps: true,
        }
    }

    /// Names the default file path `logs/<app>.log`.
    #[must_use]
    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = app.into();
        self
    }

    /// Initial configuration; absent fields keep their defaults.
    #[must_use]
    pub fn config(mut self, patch: ConfigPatch) -> Self {
        self.patch = patch;
        self
    }

    /// Every `error` call is also handed to `reporter`.
    #[must_use]
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Label passed with each report (defaults to `server prefixlog`).
    #[must_use]
    pub fn report_label(mut self, label: impl Into<String>) -> Self {
        self.report_label = label.into();
        self
    }

    /// Replaces the stdout/stderr console sink. Gating still applies.
    #[must_use]
    pub fn console_output(mut self, output: impl Output + 'static) -> Self {
        self.console = Some(Box::new(output));
        self
    }

    /// Colourised level labels on the built-in console sink.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub fn level_colors(mut self, colors: LevelColors) -> Self {
        self.level_colors = colors;
        self
    }

    /// Timestamp prefix on file lines.
    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// App defaults with the initial patch merged on top.
    fn initial_config(&self) -> Config {
        let mut config = Config::for_app(&self.app);
        config.apply(&self.patch);
        config
    }

    /// # Errors
    /// Fails if the file sink's parent directory cannot be created.
    pub fn build(self) -> Result<LoggerFactory, crate::Error> {
        let config = self.initial_config();

        let console = self.console.unwrap_or_else(|| {
            Box::new(
                ConsoleOutput::new()
                    .level_labels(true)
                    .colors(self.colors)
                    .level_colors(self.level_colors),
            )
        });

        internal::debug(
            "LOGGER",
            &format!(
                "Console: enabled={} level={}; file: enabled={} level={} path={}",
                config.console.enabled,
                config.console.level,
                config.file.enabled,
                config.file.level,
                config.file.path
            ),
        );

        let backend = Backend::new(config, console, self.timestamps)?;

        Ok(LoggerFactory {
            shared: Arc::new(Shared {
                backend: RwLock::new(backend),
                reporter: self.reporter,
                report_context: ReportContext::new(self.report_label),
            }),
        })
    }
}
