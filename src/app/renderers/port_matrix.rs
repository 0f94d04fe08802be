//! Port-by-VLAN matrix: one row per physical port, one `T`/`U` column per VLAN.

use crate::config::settings::RenderSettings;
use crate::domain::model::{PortId, SwitchConfig, Trunk, VlanRecord};
use crate::domain::table::{Column, ColumnGroup, Table};
use std::collections::BTreeSet;

const FIXED_COLUMNS: usize = 3;

struct PortRow {
    first: PortId,
    last: PortId,
    cells: Vec<String>,
}

pub fn build_port_matrix(config: &SwitchConfig, settings: &RenderSettings) -> Table {
    let h = &settings.headings;
    let vlans = config.vlans.sorted_by_id();

    let mut columns = vec![
        Column::with_width(&h.port, "-"),
        Column::with_width(&h.trunk, "-"),
        Column::with_width(&h.description, "-"),
    ];
    columns.extend(
        vlans
            .iter()
            .map(|v| Column::with_width(v.id.to_string(), &settings.layout.vlan_column_width)),
    );
    if !settings.layout.table_width {
        for column in &mut columns {
            column.width = None;
        }
    }

    let mut table = Table::new(columns);
    table.groups.push(ColumnGroup {
        label: config.hostname.clone().unwrap_or_default(),
        span: FIXED_COLUMNS,
    });
    if !vlans.is_empty() {
        table.groups.push(ColumnGroup {
            label: h.vlan_group.clone(),
            span: vlans.len(),
        });
    }

    let mut rows: Vec<PortRow> = all_ports(config)
        .into_iter()
        .filter(|p| !p.is_trunk())
        .map(|port| port_row(config, &vlans, port))
        .collect();
    if settings.layout.collapse {
        rows = collapse_rows(rows);
    }

    for row in rows {
        let label = if row.first == row.last {
            row.first.to_string()
        } else {
            format!("{}-{}", row.first, row.last)
        };
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        cells.push(label);
        cells.extend(row.cells);
        table.push_row(cells);
    }

    table
}

/// Every port mentioned by an interface block, a VLAN or a trunk, sorted.
fn all_ports(config: &SwitchConfig) -> BTreeSet<PortId> {
    let mut ports: BTreeSet<PortId> = config.interfaces.iter().map(|i| i.port.clone()).collect();
    for record in &config.vlans {
        ports.extend(record.tagged.iter().cloned());
        ports.extend(record.untagged.iter().cloned());
    }
    for trunk in &config.trunks {
        ports.extend(trunk.members.iter().cloned());
    }
    ports
}

fn port_row(config: &SwitchConfig, vlans: &[&VlanRecord], port: PortId) -> PortRow {
    let trunk = config.trunk_of(&port);
    // 聚合成員依 trunk 名稱查詢 VLAN 成員資格
    let member_key = trunk.map(|t| &t.name).unwrap_or(&port);

    let mut cells = vec![
        trunk.map(trunk_label).unwrap_or_default(),
        config
            .interface(&port)
            .and_then(|i| i.name.clone())
            .unwrap_or_default(),
    ];
    cells.extend(vlans.iter().map(|v| {
        if v.tagged.contains(member_key) {
            "T".to_string()
        } else if v.untagged.contains(member_key) {
            "U".to_string()
        } else {
            String::new()
        }
    }));

    PortRow {
        first: port.clone(),
        last: port,
        cells,
    }
}

/// Trunk name with its mode, e.g. `Trk1 (LACP)`.
fn trunk_label(trunk: &Trunk) -> String {
    match &trunk.mode {
        Some(mode) => format!("{} ({})", trunk.name, mode),
        None => trunk.name.to_string(),
    }
}

/// Merges runs of consecutive ports whose remaining cells are identical.
fn collapse_rows(rows: Vec<PortRow>) -> Vec<PortRow> {
    let mut collapsed: Vec<PortRow> = Vec::with_capacity(rows.len());
    for row in rows {
        match collapsed.last_mut() {
            Some(prev) if prev.last.is_followed_by(&row.first) && prev.cells == row.cells => {
                prev.last = row.last;
            }
            _ => collapsed.push(row),
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::{extract_switch_config, ParsePolicy};

    const CONFIG: &str = "\
hostname \"access-7\"
trunk 23-24 Trk1 LACP
interface 1
   name \"Printer\"
   exit
vlan 20
   name \"Voice\"
   tagged 1-4,Trk1
   exit
vlan 10
   name \"Data\"
   untagged 1-4
   untagged Trk1
   exit
";

    fn matrix(settings: &RenderSettings) -> Table {
        let config = extract_switch_config(CONFIG, ParsePolicy::Strict).unwrap();
        build_port_matrix(&config, settings)
    }

    #[test]
    fn test_vlan_columns_sorted_by_id() {
        let table = matrix(&RenderSettings::default());
        let headings: Vec<&str> = table.headings().collect();
        assert_eq!(headings, vec!["Port", "Trunk", "Description", "10", "20"]);
        assert_eq!(table.groups[0].label, "access-7");
        assert_eq!(table.groups[1].span, 2);
    }

    #[test]
    fn test_collapsed_rows() {
        let table = matrix(&RenderSettings::default());
        assert_eq!(
            table.rows,
            vec![
                vec!["1", "", "Printer", "U", "T"],
                vec!["2-4", "", "", "U", "T"],
                vec!["23-24", "Trk1 (LACP)", "", "U", "T"],
            ]
        );
    }

    #[test]
    fn test_trunk_without_mode_shows_name_only() {
        let config = extract_switch_config(
            "trunk 1-2 Trk3\nvlan 5\n   untagged Trk3\n",
            ParsePolicy::Strict,
        )
        .unwrap();
        let table = build_port_matrix(&config, &RenderSettings::default());
        assert_eq!(table.rows, vec![vec!["1-2", "Trk3", "", "U"]]);
    }

    #[test]
    fn test_no_collapse_lists_every_port() {
        let mut settings = RenderSettings::default();
        settings.layout.collapse = false;
        let table = matrix(&settings);
        let ports: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ports, vec!["1", "2", "3", "4", "23", "24"]);
    }

    #[test]
    fn test_collapse_requires_adjacent_numbers() {
        let config =
            extract_switch_config("vlan 1\n   untagged 1-2,5,A1\n", ParsePolicy::Strict).unwrap();
        let table = build_port_matrix(&config, &RenderSettings::default());
        let ports: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ports, vec!["1-2", "5", "A1"]);
    }

    #[test]
    fn test_width_hints_follow_settings() {
        let table = matrix(&RenderSettings::default());
        assert_eq!(table.columns[0].width.as_deref(), Some("-"));
        assert_eq!(table.columns[3].width.as_deref(), Some("3em"));

        let mut settings = RenderSettings::default();
        settings.layout.table_width = false;
        assert!(!matrix(&settings).has_width_hints());
    }

    #[test]
    fn test_empty_config() {
        let table = build_port_matrix(&SwitchConfig::default(), &RenderSettings::default());
        assert!(table.rows.is_empty());
        assert_eq!(table.groups.len(), 1);
        assert_eq!(table.columns.len(), 3);
    }
}
