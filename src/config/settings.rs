use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_single_token, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Render settings, optionally loaded from a TOML file. Every key has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub headings: Headings,
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Headings {
    pub vlan_id: String,
    pub name: String,
    pub tagged: String,
    pub untagged: String,
    pub port: String,
    pub trunk: String,
    pub description: String,
    pub vlan_group: String,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            vlan_id: "VLAN ID".to_string(),
            name: "Name".to_string(),
            tagged: "Tagged Ports".to_string(),
            untagged: "Untagged Ports".to_string(),
            port: "Port".to_string(),
            trunk: "Trunk".to_string(),
            description: "Description".to_string(),
            vlan_group: "VLAN configuration (T=tagged, U=untagged)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Merge consecutive ports with identical rows in the port layout.
    pub collapse: bool,
    /// Emit the `|< 100% ... >|` width row.
    pub table_width: bool,
    pub vlan_column_width: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            collapse: true,
            table_width: true,
            vlan_column_width: "3em".to_string(),
        }
    }
}

impl RenderSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConvertError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for RenderSettings {
    fn validate(&self) -> Result<()> {
        let h = &self.headings;
        for (field, value) in [
            ("headings.vlan_id", &h.vlan_id),
            ("headings.name", &h.name),
            ("headings.tagged", &h.tagged),
            ("headings.untagged", &h.untagged),
            ("headings.port", &h.port),
            ("headings.trunk", &h.trunk),
            ("headings.description", &h.description),
            ("headings.vlan_group", &h.vlan_group),
        ] {
            validate_non_empty_string(field, value)?;
        }
        validate_single_token("layout.vlan_column_width", &self.layout.vlan_column_width)?;
        Ok(())
    }
}
