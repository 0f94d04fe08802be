pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod port_list;

pub use crate::domain::model::{SwitchConfig, VlanRecord, VlanTable};
pub use crate::domain::ports::{ConfigSource, Pipeline, TableSink};
pub use crate::domain::table::Table;
pub use crate::utils::error::Result;
