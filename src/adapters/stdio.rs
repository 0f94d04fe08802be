use crate::domain::ports::{ConfigSource, TableSink};
use crate::utils::error::Result;
use std::io::{Read, Write};

/// Reads the whole of standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl ConfigSource for StdinSource {
    fn read_config(&self) -> Result<String> {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(decode_config(bytes))
    }
}

/// Decodes configuration bytes as UTF-8, replacing invalid sequences.
///
/// Descriptions pasted from older switches are sometimes Latin-1; those
/// characters become U+FFFD instead of failing the whole run.
pub fn decode_config(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Input is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TableSink for StdoutSink {
    fn write_output(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
