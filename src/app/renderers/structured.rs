use crate::domain::table::Table;
use crate::utils::error::{ConvertError, Result};

/// Header row of column headings followed by the data rows. Group labels are dropped.
pub fn format_csv(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.headings())?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ConvertError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn format_json(table: &Table) -> Result<String> {
    let mut text = serde_json::to_string_pretty(table)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Column;

    fn sample() -> Table {
        let mut table = Table::new(vec![Column::new("VLAN ID"), Column::new("Name")]);
        table.push_row(vec!["10".to_string(), "Data, floor 2".to_string()]);
        table
    }

    #[test]
    fn test_csv_quotes_commas() {
        let text = format_csv(&sample()).unwrap();
        assert_eq!(text, "VLAN ID,Name\n10,\"Data, floor 2\"\n");
    }

    #[test]
    fn test_json_shape() {
        let text = format_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["columns"][0]["heading"], "VLAN ID");
        assert_eq!(value["rows"][0][1], "Data, floor 2");
        assert!(value.get("groups").is_none());
    }
}
