use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lowest and highest VLAN ids a Procurve switch accepts.
pub const VLAN_ID_MIN: u16 = 1;
pub const VLAN_ID_MAX: u16 = 4094;

/// Highest port number accepted on one module; bounds range expansion.
pub const PORT_NUMBER_MAX: u32 = 1024;

/// A switch port such as `12`, `A3` or `Trk1`.
///
/// Ordering is by letter prefix first, then by number, so `A2` sorts before
/// `A10` and every bare-number port sorts before lettered modules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortId {
    prefix: String,
    number: u32,
}

impl PortId {
    pub fn new(prefix: impl Into<String>, number: u32) -> Self {
        Self {
            prefix: prefix.into(),
            number,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn is_trunk(&self) -> bool {
        self.prefix.eq_ignore_ascii_case("trk")
    }

    /// True when `other` is the next port on the same module.
    pub fn is_followed_by(&self, other: &PortId) -> bool {
        self.prefix == other.prefix && self.number.checked_add(1) == Some(other.number)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

impl FromStr for PortId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_at = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| format!("port '{}' has no port number", s))?;
        let (prefix, digits) = s.split_at(digits_at);
        if !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("port '{}' has an invalid module prefix", s));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("port '{}' must end in a port number", s));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|e| format!("port '{}': {}", s, e))?;
        if number > PORT_NUMBER_MAX {
            return Err(format!(
                "port '{}' is above the highest port number {}",
                s, PORT_NUMBER_MAX
            ));
        }
        Ok(PortId::new(prefix, number))
    }
}

impl Serialize for PortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered, de-duplicated set of ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortSet(BTreeSet<PortId>);

impl PortSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, port: PortId) -> bool {
        self.0.insert(port)
    }

    pub fn extend(&mut self, other: PortSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, port: &PortId) -> bool {
        self.0.contains(port)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PortId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PortId> for PortSet {
    fn from_iter<I: IntoIterator<Item = PortId>>(iter: I) -> Self {
        PortSet(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VlanRecord {
    pub id: u16,
    pub name: Option<String>,
    pub tagged: PortSet,
    pub untagged: PortSet,
}

impl VlanRecord {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            name: None,
            tagged: PortSet::new(),
            untagged: PortSet::new(),
        }
    }

    /// Folds a later block for the same VLAN into this one.
    pub fn merge(&mut self, later: VlanRecord) {
        if later.name.is_some() {
            self.name = later.name;
        }
        self.tagged.extend(later.tagged);
        self.untagged.extend(later.untagged);
    }
}

/// VLAN records in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VlanTable {
    records: Vec<VlanRecord>,
}

impl VlanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record`, or merges it into an earlier record with the same id.
    pub fn insert_or_merge(&mut self, record: VlanRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                tracing::debug!("VLAN {} defined again, merging", record.id);
                existing.merge(record);
            }
            None => self.records.push(record),
        }
    }

    pub fn get(&self, id: u16) -> Option<&VlanRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VlanRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by VLAN id instead of source order.
    pub fn sorted_by_id(&self) -> Vec<&VlanRecord> {
        let mut sorted: Vec<&VlanRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.id);
        sorted
    }
}

impl<'a> IntoIterator for &'a VlanTable {
    type Item = &'a VlanRecord;
    type IntoIter = std::slice::Iter<'a, VlanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub port: PortId,
    pub name: Option<String>,
}

impl Interface {
    pub fn new(port: PortId) -> Self {
        Self { port, name: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trunk {
    pub name: PortId,
    pub members: PortSet,
    pub mode: Option<String>,
}

/// Everything the extractor pulls out of one configuration dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwitchConfig {
    pub hostname: Option<String>,
    pub vlans: VlanTable,
    pub interfaces: Vec<Interface>,
    pub trunks: Vec<Trunk>,
}

impl SwitchConfig {
    pub fn insert_or_merge_interface(&mut self, interface: Interface) {
        match self
            .interfaces
            .iter_mut()
            .find(|i| i.port == interface.port)
        {
            Some(existing) => {
                if interface.name.is_some() {
                    existing.name = interface.name;
                }
            }
            None => self.interfaces.push(interface),
        }
    }

    pub fn interface(&self, port: &PortId) -> Option<&Interface> {
        self.interfaces.iter().find(|i| &i.port == port)
    }

    pub fn trunk_of(&self, port: &PortId) -> Option<&Trunk> {
        self.trunks.iter().find(|t| t.members.contains(port))
    }
}
