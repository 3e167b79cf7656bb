use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Default output next to the input: `<stem>-modified.<ext>`.
///
/// Inputs without an extension get `.conf`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("-modified.");
    name.push(input.extension().unwrap_or(OsStr::new("conf")));
    input.with_file_name(name)
}
