use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub vlans: usize,
    pub rows: usize,
    pub bytes: usize,
}

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting conversion");

        // Extract
        let config = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} VLANs, {} interfaces, {} trunks",
            config.vlans.len(),
            config.interfaces.len(),
            config.trunks.len()
        );

        // Transform
        let table = self.pipeline.transform(&config)?;
        tracing::info!("Built table with {} rows", table.rows.len());

        // Load
        let bytes = self.pipeline.load(&table)?;
        tracing::info!("Wrote {} bytes", bytes);

        Ok(RunSummary {
            vlans: config.vlans.len(),
            rows: table.rows.len(),
            bytes,
        })
    }
}
