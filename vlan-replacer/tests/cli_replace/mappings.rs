use super::*;

fn write_mapping(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("mapping write");
    path
}

#[test]
fn mapping_file_rewrites_listed_vlans() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", "set vlanid 151\nset vlanid 148\n");
    let mapping = write_mapping(&dir, "map.json", r#"{"151": 2500, "148": 2501}"#);
    let output = dir.path().join("out.conf");

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("-o")
        .arg(path_as_str(&output))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .success()
        .stdout(predicate::str::contains("Individual mappings: 2 VLANs"))
        .stdout(predicate::str::contains("Individual mappings applied: 2"))
        .stdout(predicate::str::contains("  148 -> 2501"))
        .stdout(predicate::str::contains("not found in config").not());

    assert_eq!(
        fs::read_to_string(&output).expect("output"),
        "set vlanid 2500\nset vlanid 2501\n"
    );
}

#[test]
fn toml_mapping_file_is_accepted() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", "set vlanid 151\n");
    let mapping = write_mapping(&dir, "map.toml", "\"151\" = 2500\n");

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("fw-modified.conf")).expect("output");
    assert_eq!(out, "set vlanid 2500\n");
}

#[test]
fn reports_mapping_keys_missing_from_config() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let mapping = write_mapping(&dir, "map.json", r#"{"999": 1}"#);

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .success()
        .stdout(predicate::str::contains("No VLAN IDs were replaced."))
        .stdout(predicate::str::contains(
            "VLANs in mapping file not found in config: 1\n  999",
        ));

    let out = fs::read_to_string(dir.path().join("fw-modified.conf")).expect("output");
    assert_eq!(out, FORTIGATE);
}

#[test]
fn mapping_takes_precedence_over_range() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let mapping = write_mapping(&dir, "map.json", r#"{"151": 2500}"#);

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .args(["--old-range", "100", "200", "--new-range", "500", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mode: Combined (individual mappings take precedence)",
        ));

    let out = fs::read_to_string(dir.path().join("fw-modified.conf")).expect("output");
    assert!(out.contains("set vlanid 2500\n"));
    assert!(out.contains("set vlanid 548\n"));
}

#[test]
fn invalid_vlan_id_in_mapping_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let mapping = write_mapping(&dir, "map.json", r#"{"abc": 2500}"#);

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid VLAN id"));

    assert!(!dir.path().join("fw-modified.conf").exists());
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let mapping = write_mapping(&dir, "map.json", "{\"151\": ");

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn empty_mapping_without_range_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let mapping = write_mapping(&dir, "map.json", "{}");

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&mapping))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no replacement method supplied"));
}

#[test]
fn missing_mapping_file_fails() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("--mapping-file")
        .arg(path_as_str(&dir.path().join("absent.json")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read mapping file"));
}

#[test]
fn inverse_mapping_round_trips_file() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);
    let forward = write_mapping(&dir, "forward.json", r#"{"151": 2500, "148": 2501}"#);
    let backward = write_mapping(&dir, "backward.json", r#"{"2500": 151, "2501": 148}"#);
    let there = dir.path().join("there.conf");
    let back = dir.path().join("back.conf");

    vlan_replacer()
        .arg(path_as_str(&input))
        .arg("-o")
        .arg(path_as_str(&there))
        .arg("--mapping-file")
        .arg(path_as_str(&forward))
        .assert()
        .success();
    vlan_replacer()
        .arg(path_as_str(&there))
        .arg("-o")
        .arg(path_as_str(&back))
        .arg("--mapping-file")
        .arg(path_as_str(&backward))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&back).expect("round trip"), FORTIGATE);
}
