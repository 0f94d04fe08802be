//! Line scanner turning a Procurve configuration dump into a [`SwitchConfig`].
//!
//! Block structure follows the dump format: a `vlan <id>` or `interface <port>`
//! header opens a block, lines indented deeper than the header belong to it,
//! and the block ends at `exit`, at the next line indented no deeper than the
//! header, or at end of input. Indentation is relative, so a paste that shifts
//! every line by the same amount parses the same.

use crate::core::port_list::parse_port_list;
use crate::domain::model::{
    Interface, PortId, SwitchConfig, Trunk, VlanRecord, VlanTable, VLAN_ID_MAX, VLAN_ID_MIN,
};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::validate_range;
use regex::Regex;
use std::sync::LazyLock;

static VLAN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^vlan\s+(\S+)$").expect("valid regex"));
static EXIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^exit$").expect("valid regex"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^name\s+"?(.+?)"?$"#).expect("valid regex"));
static UNTAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^untagged\s+(\S+)$").expect("valid regex"));
static TAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^tagged\s+(\S+)$").expect("valid regex"));
static INTERFACE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^interface\s+(\S+)$").expect("valid regex"));
static HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^hostname\s+"?(.+?)"?$"#).expect("valid regex"));
static TRUNK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^trunk\s+(\S+)\s+(trk\d+)(?:\s+(\S+))?$").expect("valid regex")
});

/// What to do with a recognized directive whose argument cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort on the first malformed directive.
    #[default]
    Strict,
    /// Log a warning and skip the line.
    Lenient,
}

#[derive(Debug, Default)]
enum BlockState {
    #[default]
    Outside,
    InVlan { record: VlanRecord, indent: usize },
    InInterface { interface: Interface, indent: usize },
}

impl BlockState {
    /// Indentation of the open block's header line.
    fn header_indent(&self) -> Option<usize> {
        match self {
            BlockState::Outside => None,
            BlockState::InVlan { indent, .. } | BlockState::InInterface { indent, .. } => {
                Some(*indent)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigExtractor {
    policy: ParsePolicy,
    state: BlockState,
    config: SwitchConfig,
    skipped: usize,
}

impl ConfigExtractor {
    pub fn new(policy: ParsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Number of malformed lines skipped under [`ParsePolicy::Lenient`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Feeds one raw line; `line_no` is 1-based and only used for diagnostics.
    pub fn feed_line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        match self.scan_line(line_no, raw) {
            Err(ConvertError::ParseError { line, message })
                if self.policy == ParsePolicy::Lenient =>
            {
                tracing::warn!("Skipping line {}: {}", line, message);
                self.skipped += 1;
                Ok(())
            }
            other => other,
        }
    }

    /// Flushes any open block and returns the collected configuration.
    pub fn finish(mut self) -> SwitchConfig {
        self.close_block();
        self.config
    }

    fn scan_line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }
        let indent = leading_whitespace(raw);

        if let Some(caps) = VLAN_HEADER.captures(line) {
            self.close_block();
            let id = parse_vlan_id(line_no, &caps[1])?;
            tracing::debug!("Line {}: entering VLAN {}", line_no, id);
            self.state = BlockState::InVlan {
                record: VlanRecord::new(id),
                indent,
            };
            return Ok(());
        }

        if EXIT.is_match(line) {
            self.close_block();
            return Ok(());
        }

        if self
            .state
            .header_indent()
            .is_some_and(|header_indent| indent > header_indent)
        {
            return self.scan_attribute(line_no, line);
        }

        // 縮排不深於標頭的行代表區塊結束
        self.close_block();
        self.scan_top_level(line_no, line, indent)
    }

    fn scan_attribute(&mut self, line_no: usize, line: &str) -> Result<()> {
        match &mut self.state {
            BlockState::Outside => {}
            BlockState::InVlan { record, .. } => {
                if let Some(caps) = NAME.captures(line) {
                    record.name = Some(caps[1].to_string());
                } else if let Some(caps) = UNTAGGED.captures(line) {
                    let ports = parse_port_list(&caps[1])
                        .map_err(|reason| ConvertError::parse(line_no, reason))?;
                    record.untagged.extend(ports);
                } else if let Some(caps) = TAGGED.captures(line) {
                    let ports = parse_port_list(&caps[1])
                        .map_err(|reason| ConvertError::parse(line_no, reason))?;
                    record.tagged.extend(ports);
                } else {
                    tracing::trace!("Line {}: ignoring '{}' in VLAN {}", line_no, line, record.id);
                }
            }
            BlockState::InInterface { interface, .. } => {
                if let Some(caps) = NAME.captures(line) {
                    interface.name = Some(caps[1].to_string());
                }
            }
        }
        Ok(())
    }

    fn scan_top_level(&mut self, line_no: usize, line: &str, indent: usize) -> Result<()> {
        if let Some(caps) = INTERFACE_HEADER.captures(line) {
            let port: PortId = caps[1]
                .parse()
                .map_err(|reason: String| ConvertError::parse(line_no, reason))?;
            self.state = BlockState::InInterface {
                interface: Interface::new(port),
                indent,
            };
        } else if let Some(caps) = HOSTNAME.captures(line) {
            self.config.hostname = Some(caps[1].to_string());
        } else if let Some(caps) = TRUNK.captures(line) {
            let members = parse_port_list(&caps[1])
                .map_err(|reason| ConvertError::parse(line_no, reason))?;
            let name: PortId = caps[2]
                .parse()
                .map_err(|reason: String| ConvertError::parse(line_no, reason))?;
            tracing::debug!("Line {}: trunk {} with {} members", line_no, name, members.len());
            self.config.trunks.push(Trunk {
                name,
                members,
                mode: caps.get(3).map(|m| m.as_str().to_string()),
            });
        }
        Ok(())
    }

    fn close_block(&mut self) {
        match std::mem::take(&mut self.state) {
            BlockState::Outside => {}
            BlockState::InVlan { record, .. } => self.config.vlans.insert_or_merge(record),
            BlockState::InInterface { interface, .. } => {
                self.config.insert_or_merge_interface(interface)
            }
        }
    }
}

fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count()
}

fn parse_vlan_id(line_no: usize, token: &str) -> Result<u16> {
    let id: u32 = token.parse().map_err(|_| {
        ConvertError::parse(line_no, format!("VLAN id '{}' is not an integer", token))
    })?;
    validate_range("VLAN id", id, u32::from(VLAN_ID_MIN), u32::from(VLAN_ID_MAX))
        .map_err(|e| ConvertError::parse(line_no, e.to_string()))?;
    // 範圍已驗證
    Ok(id as u16)
}

/// Extracts the full switch configuration from `text`.
pub fn extract_switch_config(text: &str, policy: ParsePolicy) -> Result<SwitchConfig> {
    let mut extractor = ConfigExtractor::new(policy);
    for (idx, line) in text.lines().enumerate() {
        extractor.feed_line(idx + 1, line)?;
    }
    if extractor.skipped() > 0 {
        tracing::warn!("{} malformed line(s) skipped", extractor.skipped());
    }
    Ok(extractor.finish())
}

/// Extracts only the VLAN table, failing on the first malformed directive.
pub fn extract_vlan_table<'a, I>(lines: I) -> Result<VlanTable>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extractor = ConfigExtractor::new(ParsePolicy::Strict);
    for (idx, line) in lines.into_iter().enumerate() {
        extractor.feed_line(idx + 1, line)?;
    }
    Ok(extractor.finish().vlans)
}
