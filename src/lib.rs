pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemorySink, MemorySource, StdinSource, StdoutSink};
pub use app::renderers::{render_vlan_table, Layout, OutputFormat};
pub use config::RenderSettings;
pub use crate::core::engine::{ConvertEngine, RunSummary};
pub use crate::core::extractor::{extract_switch_config, extract_vlan_table, ParsePolicy};
pub use crate::core::pipeline::{ConvertOptions, MarkupPipeline};
pub use domain::model::{PortId, PortSet, SwitchConfig, VlanRecord, VlanTable};
pub use utils::error::{ConvertError, Result};
