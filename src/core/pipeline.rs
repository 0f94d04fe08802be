use crate::app::renderers::{Layout, OutputFormat};
use crate::config::settings::RenderSettings;
use crate::core::extractor::{extract_switch_config, ParsePolicy};
use crate::core::{ConfigSource, Pipeline, SwitchConfig, Table, TableSink};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub layout: Layout,
    pub format: OutputFormat,
    pub policy: ParsePolicy,
    pub settings: RenderSettings,
}

/// Reads a configuration dump from a source and writes one rendered table to a sink.
pub struct MarkupPipeline<S: ConfigSource, K: TableSink> {
    source: S,
    sink: K,
    options: ConvertOptions,
}

impl<S: ConfigSource, K: TableSink> MarkupPipeline<S, K> {
    pub fn new(source: S, sink: K, options: ConvertOptions) -> Self {
        Self {
            source,
            sink,
            options,
        }
    }
}

impl<S: ConfigSource, K: TableSink> Pipeline for MarkupPipeline<S, K> {
    fn extract(&self) -> Result<SwitchConfig> {
        let text = self.source.read_config()?;
        tracing::debug!("Read {} bytes of configuration", text.len());
        extract_switch_config(&text, self.options.policy)
    }

    fn transform(&self, config: &SwitchConfig) -> Result<Table> {
        tracing::debug!("Building {:?} layout", self.options.layout);
        Ok(self.options.layout.build(config, &self.options.settings))
    }

    fn load(&self, table: &Table) -> Result<usize> {
        let text = self.options.format.format(table, &self.options.settings)?;
        tracing::debug!("Writing {} bytes as {:?}", text.len(), self.options.format);
        self.sink.write_output(&text)?;
        Ok(text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemorySink, MemorySource};
    use crate::utils::error::ConvertError;

    #[test]
    fn test_pipeline_stages() {
        let sink = MemorySink::new();
        let pipeline = MarkupPipeline::new(
            MemorySource::new("vlan 10\n   name \"Data\"\n"),
            sink.clone(),
            ConvertOptions::default(),
        );

        let config = pipeline.extract().unwrap();
        assert_eq!(config.vlans.len(), 1);

        let table = pipeline.transform(&config).unwrap();
        assert_eq!(table.rows.len(), 1);

        let written = pipeline.load(&table).unwrap();
        assert_eq!(written, sink.contents().len());
        assert!(sink.contents().contains("| 10      | Data |"));
    }

    #[test]
    fn test_extract_propagates_parse_errors() {
        let pipeline = MarkupPipeline::new(
            MemorySource::new("vlan ten\n"),
            MemorySink::new(),
            ConvertOptions::default(),
        );
        assert!(matches!(
            pipeline.extract(),
            Err(ConvertError::ParseError { line: 1, .. })
        ));
    }
}
