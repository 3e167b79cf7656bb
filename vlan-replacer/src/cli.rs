use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

const EXAMPLES: &str = "\
Examples:
  # Range-based replacement: replace VLANs 100-200 with 500-600
  vlan-replacer fortigate.conf --old-range 100 200 --new-range 500 600

  # Individual mappings from a JSON file
  vlan-replacer fortigate.conf --mapping-file vlan-mappings.json

  # Combined: individual mappings take precedence over ranges
  vlan-replacer fortigate.conf --old-range 100 200 --new-range 500 600 --mapping-file vlan-mappings.json

  # Explicit output file
  vlan-replacer fortigate.conf -o new-fortigate.conf --mapping-file vlan-mappings.json";

#[derive(Parser, Debug)]
#[command(name = "vlan-replacer")]
#[command(about = "Replace VLAN IDs in Fortigate configuration files")]
#[command(after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("method")
        .required(true)
        .multiple(true)
        .args(["mapping_file", "old_range"])
))]
pub struct Cli {
    /// Input Fortigate configuration file.
    pub input: PathBuf,
    /// Output file (default: <input>-modified.<ext>).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// JSON file with individual VLAN mappings, e.g. {"151": 2500, "148": 2501}.
    /// Files ending in .toml are read as TOML.
    #[arg(long)]
    pub mapping_file: Option<PathBuf>,
    /// Old VLAN range to replace.
    #[arg(long, num_args = 2, value_names = ["START", "END"], requires = "new_range")]
    pub old_range: Option<Vec<u32>>,
    /// New VLAN range to use.
    #[arg(long, num_args = 2, value_names = ["START", "END"], requires = "old_range")]
    pub new_range: Option<Vec<u32>>,
    /// Output format for the replacement report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only print errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Emit debug logs on stderr.
    #[arg(short, long)]
    pub verbose: bool,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
