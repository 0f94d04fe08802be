use serde::Serialize;

/// Label spanning one or more columns above the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGroup {
    pub label: String,
    pub span: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub heading: String,
    /// Width hint for the DokuWiki tablewidth row, `None` meaning automatic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl Column {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            width: None,
        }
    }

    pub fn with_width(heading: impl Into<String>, width: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            width: Some(width.into()),
        }
    }
}

/// Output-neutral table built by a layout and written by a format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ColumnGroup>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            groups: Vec::new(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.heading.as_str())
    }

    pub fn has_width_hints(&self) -> bool {
        self.columns.iter().any(|c| c.width.is_some())
    }
}
