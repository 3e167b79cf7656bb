use thiserror::Error;

use crate::VlanId;

/// Errors raised while building or validating a replacement configuration.
///
/// Every variant is detected before any text is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither a non-empty mapping table nor a range pair was supplied.
    #[error("no replacement method supplied: provide a mapping file or an old/new range pair")]
    NoReplacementMethod,
    /// Old range start is not strictly below its end.
    #[error("invalid old range: start ({start}) must be less than end ({end})")]
    InvalidOldRange { start: VlanId, end: VlanId },
    /// New range start is not strictly below its end.
    #[error("invalid new range: start ({start}) must be less than end ({end})")]
    InvalidNewRange { start: VlanId, end: VlanId },
    /// Old and new ranges hold a different number of ids.
    #[error(
        "range size mismatch: old range {old_start}-{old_end} ({old_len} VLANs) vs new range \
         {new_start}-{new_end} ({new_len} VLANs); both ranges must have the same number of VLANs"
    )]
    RangeSizeMismatch {
        old_start: VlanId,
        old_end: VlanId,
        old_len: u64,
        new_start: VlanId,
        new_end: VlanId,
        new_len: u64,
    },
    /// A mapping key or value is not a non-negative integer VLAN id.
    #[error("invalid VLAN id {value:?}: {reason}")]
    InvalidVlanId { value: String, reason: String },
}

/// Errors returned when loading a mapping table from a file.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read mapping file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse mapping file {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid mapping file {path}: {source}")]
    Config { path: String, source: ConfigError },
}
