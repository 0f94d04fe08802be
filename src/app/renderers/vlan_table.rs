use crate::config::settings::RenderSettings;
use crate::core::port_list::format_port_list;
use crate::domain::model::VlanTable;
use crate::domain::table::{Column, ColumnGroup, Table};

/// One row per VLAN, in table order.
pub fn build_vlan_table(
    vlans: &VlanTable,
    hostname: Option<&str>,
    settings: &RenderSettings,
) -> Table {
    let h = &settings.headings;
    let mut table = Table::new(vec![
        Column::new(&h.vlan_id),
        Column::new(&h.name),
        Column::new(&h.tagged),
        Column::new(&h.untagged),
    ]);

    if let Some(hostname) = hostname {
        table.groups.push(ColumnGroup {
            label: hostname.to_string(),
            span: table.columns.len(),
        });
    }

    for record in vlans {
        table.push_row(vec![
            record.id.to_string(),
            record.name.clone().unwrap_or_default(),
            format_port_list(&record.tagged),
            format_port_list(&record.untagged),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::extract_vlan_table;

    #[test]
    fn test_rows_follow_source_order() {
        let vlans = extract_vlan_table("vlan 30\nvlan 10\nvlan 20\n".lines()).unwrap();
        let table = build_vlan_table(&vlans, None, &RenderSettings::default());
        let ids: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
        assert!(table.groups.is_empty());
    }

    #[test]
    fn test_missing_name_is_empty_cell() {
        let vlans = extract_vlan_table("vlan 99\n   tagged A1-A2\n".lines()).unwrap();
        let table = build_vlan_table(&vlans, Some("edge-3"), &RenderSettings::default());
        assert_eq!(table.rows, vec![vec!["99", "", "A1-A2", ""]]);
        assert_eq!(table.groups[0].label, "edge-3");
        assert_eq!(table.groups[0].span, 4);
    }
}
