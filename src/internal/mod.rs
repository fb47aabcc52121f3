//! prefixlog's own diagnostics (config loading, directory creation, write
//! failures), routed through a console-only [`Gate`] named `prefixlog`.
//!
//! Uses `OnceLock` so the diagnostic logger is initialized exactly once,
//! even if several entry points race to call `init`.

use crate::config::ConfigPatch;
use crate::gate::{Gate, GateLogger};
use crate::level::{Level, Threshold};
use crate::log::Log;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<GateLogger> = OnceLock::new();

/// Enables diagnostics at `level` and above. Only the first call takes effect.
pub fn init(level: impl Into<Threshold>) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    let threshold = level.into();
    INTERNAL_LOGGER.get_or_init(|| {
        let patch = ConfigPatch::new()
            .console_enabled(true)
            .console_level(threshold.clone());
        Gate::new(&patch).logger(crate::config::DEFAULT_APP)
    });
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics enabled at {threshold}"));
    }
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, crate::args![format!("{scope}:"), msg]);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
