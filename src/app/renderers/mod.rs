pub mod dokuwiki;
pub mod port_matrix;
pub mod structured;
pub mod vlan_table;

use crate::config::settings::RenderSettings;
use crate::domain::model::{SwitchConfig, VlanTable};
use crate::domain::table::Table;
use crate::utils::error::Result;

pub use dokuwiki::format_dokuwiki;
pub use port_matrix::build_port_matrix;
pub use structured::{format_csv, format_json};
pub use vlan_table::build_vlan_table;

/// Which table to build from the parsed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Layout {
    /// One row per VLAN
    #[default]
    Vlans,
    /// One row per port, one column per VLAN
    Ports,
}

impl Layout {
    pub fn build(self, config: &SwitchConfig, settings: &RenderSettings) -> Table {
        match self {
            Layout::Vlans => build_vlan_table(&config.vlans, config.hostname.as_deref(), settings),
            Layout::Ports => build_port_matrix(config, settings),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Dokuwiki,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn format(self, table: &Table, settings: &RenderSettings) -> Result<String> {
        match self {
            OutputFormat::Dokuwiki => Ok(format_dokuwiki(table, settings.layout.table_width)),
            OutputFormat::Csv => format_csv(table),
            OutputFormat::Json => format_json(table),
        }
    }
}

/// Renders a VLAN table as DokuWiki markup with default headings.
pub fn render_vlan_table(vlans: &VlanTable) -> String {
    let table = build_vlan_table(vlans, None, &RenderSettings::default());
    format_dokuwiki(&table, false)
}
