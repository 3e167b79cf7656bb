use super::*;

#[test]
fn rejects_range_size_mismatch_with_sizes() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);

    vlan_replacer()
        .arg(path_as_str(&input))
        .args(["--old-range", "100", "200", "--new-range", "500", "599"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("range size mismatch"))
        .stderr(predicate::str::contains("101 VLANs"))
        .stderr(predicate::str::contains("100 VLANs"));

    assert!(!dir.path().join("fw-modified.conf").exists());
}

#[test]
fn rejects_inverted_old_range() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);

    vlan_replacer()
        .arg(path_as_str(&input))
        .args(["--old-range", "200", "100", "--new-range", "500", "600"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid old range"));
}

#[test]
fn rejects_single_vlan_new_range() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", FORTIGATE);

    vlan_replacer()
        .arg(path_as_str(&input))
        .args(["--old-range", "100", "101", "--new-range", "500", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid new range"));
}

#[test]
fn reports_range_ids_not_found() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(&dir, "fw.conf", "set vlanid 11\n");

    vlan_replacer()
        .arg(path_as_str(&input))
        .args(["--old-range", "10", "12", "--new-range", "20", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  11 -> 21"))
        .stdout(predicate::str::contains(
            "VLANs in range 10-12 not found in config: 2",
        ))
        .stdout(predicate::str::contains("  10, 12"));
}
