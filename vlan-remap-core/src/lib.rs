//! VLAN id substitution for device configuration text.
//!
//! The engine recognizes one statement shape, `set vlanid <n>`, and rewrites
//! the id through two tiers: an explicit [`MappingTable`] first, then a
//! [`RangeSpec`] offset. Everything else in the text is copied through
//! untouched. Each pass returns a [`Report`] describing what changed and
//! which requested ids were never seen.
//!
//! ```
//! use vlan_remap_core::{Engine, MappingTable};
//!
//! let table = MappingTable::from_pairs([(151, 2500), (148, 2501)]);
//! let engine = Engine::configure(Some(table), None).unwrap();
//! let (out, report) = engine.apply("set vlanid 151\nset vlanid 148\n");
//! assert_eq!(out, "set vlanid 2500\nset vlanid 2501\n");
//! assert_eq!(report.mapping.len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod mapping;
pub mod range;
pub mod report;

/// Integer VLAN identifier as it appears in configuration text.
pub type VlanId = u32;

pub use engine::{Engine, Mode};
pub use error::{ConfigError, MappingError};
pub use format::{format_json, format_summary, format_text};
pub use mapping::{load_mapping_file, parse_mapping, parse_vlan_id, MappingFormat, MappingTable};
pub use range::RangeSpec;
pub use report::{ReplacementRecord, ReplacementSource, Report};
