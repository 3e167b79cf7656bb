use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const FORTIGATE: &str = "config system interface
    edit \"port1.151\"
        set vdom \"root\"
        set interface \"port1\"
        set vlanid 151
    next
    edit \"port1.148\"
        set vdom \"root\"
        set interface \"port1\"
        set vlanid 148
    next
end
";

fn vlan_replacer() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vlan-replacer"));
    cmd.arg("--no-color");
    cmd
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("input write");
    path
}

mod mappings;
mod ranges;
