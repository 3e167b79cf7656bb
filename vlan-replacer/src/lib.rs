//! Fortigate configuration VLAN id replacement.
//!
//! The `vlan-replacer` binary reads a configuration file, rewrites every
//! `set vlanid <n>` statement through a mapping table and/or a range offset,
//! and writes the result next to the input. The substitution itself lives in
//! `vlan-remap-core`; this crate adds the terminal-facing pieces:
//!
//! - [`output_path`] — default `<stem>-modified.<ext>` output naming
//! - [`report`] — banner, colored summary and JSON run summary

pub mod output_path;
pub mod report;
