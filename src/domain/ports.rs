use crate::domain::model::SwitchConfig;
use crate::domain::table::Table;
use crate::utils::error::Result;

/// Where the configuration text comes from.
pub trait ConfigSource {
    fn read_config(&self) -> Result<String>;
}

/// Where the rendered output goes.
pub trait TableSink {
    fn write_output(&self, text: &str) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<SwitchConfig>;
    fn transform(&self, config: &SwitchConfig) -> Result<Table>;
    /// Writes the table and returns the number of bytes emitted.
    fn load(&self, table: &Table) -> Result<usize>;
}
