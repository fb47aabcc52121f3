//! In-memory sink for tests and for embedders that forward lines elsewhere.

use super::{LogRecord, Output};
use std::sync::{Arc, Mutex, PoisonError};

/// Records every write. Clones share the same buffer, so keep one clone to
/// inspect while the other is owned by a logger family.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Each record rendered as `[name] args...`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(LogRecord::line).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Output for MemoryOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
