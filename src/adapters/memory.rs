use crate::domain::ports::{ConfigSource, TableSink};
use crate::utils::error::{ConvertError, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ConfigSource for MemorySource {
    fn read_config(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Collects output in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }
}

impl TableSink for MemorySink {
    fn write_output(&self, text: &str) -> Result<()> {
        let mut buffer = self.buffer.lock().map_err(|_| ConvertError::ProcessingError {
            message: "output buffer lock poisoned".to_string(),
        })?;
        buffer.push_str(text);
        Ok(())
    }
}
