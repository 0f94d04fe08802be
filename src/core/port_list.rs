//! Procurve port lists: `1-24`, `A1-A4,B7`, `Trk1,Trk2`.

use crate::domain::model::{PortId, PortSet};

/// Parses a comma-separated port list, expanding ranges.
///
/// A range must keep the same module prefix on both ends and must not run
/// backwards. Errors are plain reasons; the caller attaches the line number.
pub fn parse_port_list(list: &str) -> Result<PortSet, String> {
    let mut ports = PortSet::new();
    for item in list.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err(format!("empty entry in port list '{}'", list));
        }
        match item.split_once('-') {
            Some((start, end)) => {
                for port in expand_range(start, end)? {
                    ports.insert(port);
                }
            }
            None => {
                ports.insert(item.parse::<PortId>()?);
            }
        }
    }
    Ok(ports)
}

fn expand_range(start: &str, end: &str) -> Result<Vec<PortId>, String> {
    let first: PortId = start.parse()?;
    let last: PortId = end.parse()?;
    if first.prefix() != last.prefix() {
        return Err(format!("port range {}-{} spans two modules", start, end));
    }
    if first.number() > last.number() {
        return Err(format!("port range {}-{} runs backwards", start, end));
    }
    Ok((first.number()..=last.number())
        .map(|n| PortId::new(first.prefix(), n))
        .collect())
}

/// Renders ports comma-separated, collapsing consecutive runs into ranges.
pub fn format_port_list(ports: &PortSet) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut run: Option<(&PortId, &PortId)> = None;

    for port in ports.iter() {
        run = match run {
            Some((first, last)) if last.is_followed_by(port) => Some((first, port)),
            Some((first, last)) => {
                parts.push(format_run(first, last));
                Some((port, port))
            }
            None => Some((port, port)),
        };
    }
    if let Some((first, last)) = run {
        parts.push(format_run(first, last));
    }
    parts.join(",")
}

fn format_run(first: &PortId, last: &PortId) -> String {
    if first == last {
        first.to_string()
    } else {
        format!("{}-{}", first, last)
    }
}
