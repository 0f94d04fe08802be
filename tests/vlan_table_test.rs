use anyhow::Result;
use procurve_dokuwiki::{
    extract_switch_config, extract_vlan_table, render_vlan_table, ConvertEngine, ConvertError,
    ConvertOptions, MarkupPipeline, MemorySink, MemorySource, ParsePolicy,
};

const TWO_VLANS: &str = "\
vlan 10
   name \"Data\"
   untagged 1-24
vlan 20
   name \"Voice\"
   tagged 1-24
";

fn run(input: &str, options: ConvertOptions) -> procurve_dokuwiki::Result<String> {
    let sink = MemorySink::new();
    let pipeline = MarkupPipeline::new(MemorySource::new(input), sink.clone(), options);
    ConvertEngine::new(pipeline).run()?;
    Ok(sink.contents())
}

#[test]
fn test_data_and_voice_scenario() -> Result<()> {
    let output = run(TWO_VLANS, ConvertOptions::default())?;
    assert_eq!(
        output,
        "^ VLAN ID ^ Name  ^ Tagged Ports ^ Untagged Ports ^\n\
         | 10      | Data  |              | 1-24           |\n\
         | 20      | Voice | 1-24         |                |\n"
    );
    Ok(())
}

#[test]
fn test_one_row_per_distinct_vlan_in_input_order() -> Result<()> {
    let input = "vlan 300\nvlan 7\n   name x\nvlan 42\nvlan 1\n";
    let table = extract_vlan_table(input.lines())?;
    let ids: Vec<u16> = table.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![300, 7, 42, 1]);

    let output = render_vlan_table(&table);
    assert_eq!(output.lines().count(), 1 + 4);
    Ok(())
}

#[test]
fn test_rendering_twice_is_identical() -> Result<()> {
    let table = extract_vlan_table(TWO_VLANS.lines())?;
    assert_eq!(render_vlan_table(&table), render_vlan_table(&table));
    Ok(())
}

#[test]
fn test_unknown_directives_do_not_change_records() -> Result<()> {
    let plain = extract_vlan_table(TWO_VLANS.lines())?;
    let noisy_input = TWO_VLANS.replace(
        "   untagged 1-24\n",
        "   untagged 1-24\n   ip igmp\n   voice\n   no untagged 25\n",
    );
    let noisy = extract_vlan_table(noisy_input.lines())?;
    assert_eq!(plain, noisy);
    Ok(())
}

#[test]
fn test_empty_input_gives_header_only() -> Result<()> {
    let output = run("", ConvertOptions::default())?;
    assert_eq!(
        output,
        "^ VLAN ID ^ Name ^ Tagged Ports ^ Untagged Ports ^\n"
    );
    Ok(())
}

#[test]
fn test_vlan_without_name() -> Result<()> {
    let table = extract_vlan_table(["vlan 5", "   untagged 3"])?;
    assert_eq!(table.get(5).and_then(|r| r.name.clone()), None);
    let output = render_vlan_table(&table);
    assert!(output.ends_with("| 5       |      |              | 3              |\n"));
    Ok(())
}

#[test]
fn test_non_integer_id_fails_in_strict_mode() {
    let err = run("vlan 10\nvlan abc\n", ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::ParseError { line: 2, .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_non_integer_id_is_skipped_in_lenient_mode() -> Result<()> {
    let options = ConvertOptions {
        policy: ParsePolicy::Lenient,
        ..ConvertOptions::default()
    };
    let output = run("vlan abc\n   name \"Ghost\"\nvlan 10\n", options)?;
    assert_eq!(output.lines().count(), 2);
    assert!(!output.contains("Ghost"));
    Ok(())
}

#[test]
fn test_duplicate_vlan_blocks_merge() -> Result<()> {
    let input = "vlan 10\n   untagged 1-4\nvlan 20\nvlan 10\n   name \"Data\"\n   untagged 5-8\n";
    let config = extract_switch_config(input, ParsePolicy::Strict)?;
    assert_eq!(config.vlans.len(), 2);
    let output = render_vlan_table(&config.vlans);
    assert!(output.contains("| 10      | Data |              | 1-8            |"));
    Ok(())
}

#[test]
fn test_hostname_adds_group_row() -> Result<()> {
    let output = run("hostname \"sw-lab\"\nvlan 1\n", ConvertOptions::default())?;
    assert!(output.starts_with("^ sw-lab ^^^^\n^ VLAN ID ^"));
    Ok(())
}
