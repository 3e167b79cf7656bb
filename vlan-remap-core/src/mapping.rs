//! Explicit old-to-new VLAN id tables and the file formats they load from.
//!
//! Mapping files are flat key/value documents whose keys (and optionally
//! values) are integer strings, for example `{"151": 2500, "148": 2501}`.
//! Coercion to [`VlanId`] happens once, here, so the engine only ever sees a
//! typed table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ConfigError, MappingError};
use crate::VlanId;

/// Immutable old-to-new id table, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: BTreeMap<VlanId, VlanId>,
}

/// On-disk encodings accepted for mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    Json,
    Toml,
}

impl MappingFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl MappingTable {
    /// Build a table from typed pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (VlanId, VlanId)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Parse a JSON object such as `{"151": 2500}`.
    pub fn from_json_str(raw: &str) -> Result<Self, MappingError> {
        parse_mapping(raw, MappingFormat::Json, "<inline>".to_string())
    }

    /// Parse a flat TOML table such as `"151" = 2500`.
    pub fn from_toml_str(raw: &str) -> Result<Self, MappingError> {
        parse_mapping(raw, MappingFormat::Toml, "<inline>".to_string())
    }

    pub fn get(&self, old: VlanId) -> Option<VlanId> {
        self.entries.get(&old).copied()
    }

    pub fn contains(&self, old: VlanId) -> bool {
        self.entries.contains_key(&old)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = VlanId> + '_ {
        self.entries.keys().copied()
    }

    /// `(old, new)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (VlanId, VlanId)> + '_ {
        self.entries.iter().map(|(old, new)| (*old, *new))
    }

    /// Swap keys and values. Fails if two keys share a target.
    pub fn inverse(&self) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        for (old, new) in self.iter() {
            if let Some(previous) = entries.insert(new, old) {
                return Err(ConfigError::InvalidVlanId {
                    value: new.to_string(),
                    reason: format!("target is shared by keys {previous} and {old}"),
                });
            }
        }
        Ok(Self { entries })
    }
}

/// Load a mapping table from disk, choosing the format from the extension.
pub fn load_mapping_file(path: &Path) -> Result<MappingTable, MappingError> {
    let raw = fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_mapping(
        &raw,
        MappingFormat::from_path(path),
        path.display().to_string(),
    )
}

/// Parse a mapping document; `origin` is only used in error messages.
pub fn parse_mapping(
    raw: &str,
    format: MappingFormat,
    origin: String,
) -> Result<MappingTable, MappingError> {
    let pairs = match format {
        MappingFormat::Json => json_pairs(raw, &origin)?,
        MappingFormat::Toml => toml_pairs(raw, &origin)?,
    };

    let mut entries = BTreeMap::new();
    for (key, value) in pairs {
        let old = parse_vlan_id(&key).map_err(|source| MappingError::Config {
            path: origin.clone(),
            source,
        })?;
        let new = value.map_err(|source| MappingError::Config {
            path: origin.clone(),
            source,
        })?;
        // "1" and "01" both normalize to 1.
        if entries.insert(old, new).is_some() {
            return Err(MappingError::Config {
                path: origin,
                source: ConfigError::InvalidVlanId {
                    value: key,
                    reason: format!("duplicate mapping for VLAN {old}"),
                },
            });
        }
    }

    tracing::debug!(origin = %origin, entries = entries.len(), "loaded VLAN mapping table");
    Ok(MappingTable { entries })
}

/// Parse a decimal VLAN id, tolerating surrounding whitespace.
pub fn parse_vlan_id(raw: &str) -> Result<VlanId, ConfigError> {
    let trimmed = raw.trim();
    let negative = trimmed
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    if negative {
        return Err(ConfigError::InvalidVlanId {
            value: raw.to_string(),
            reason: "VLAN ids must not be negative".to_string(),
        });
    }
    trimmed
        .parse::<VlanId>()
        .map_err(|err| ConfigError::InvalidVlanId {
            value: raw.to_string(),
            reason: format!("must be an integer ({err})"),
        })
}

type RawPair = (String, Result<VlanId, ConfigError>);

fn json_pairs(raw: &str, origin: &str) -> Result<Vec<RawPair>, MappingError> {
    let doc: serde_json::Value = serde_json::from_str(raw).map_err(|err| MappingError::Parse {
        path: origin.to_string(),
        message: format!("invalid JSON: {err}"),
    })?;
    let serde_json::Value::Object(map) = doc else {
        return Err(MappingError::Parse {
            path: origin.to_string(),
            message: "expected a JSON object of old -> new VLAN ids".to_string(),
        });
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let new = json_value_id(&value);
            (key, new)
        })
        .collect())
}

fn json_value_id(value: &serde_json::Value) -> Result<VlanId, ConfigError> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|v| VlanId::try_from(v).ok())
            .ok_or_else(|| ConfigError::InvalidVlanId {
                value: n.to_string(),
                reason: "must be a non-negative integer".to_string(),
            }),
        serde_json::Value::String(s) => parse_vlan_id(s),
        other => Err(ConfigError::InvalidVlanId {
            value: other.to_string(),
            reason: "must be an integer".to_string(),
        }),
    }
}

fn toml_pairs(raw: &str, origin: &str) -> Result<Vec<RawPair>, MappingError> {
    let table: toml::Table = toml::from_str(raw).map_err(|err| MappingError::Parse {
        path: origin.to_string(),
        message: format!("invalid TOML: {err}"),
    })?;

    Ok(table
        .into_iter()
        .map(|(key, value)| {
            let new = match &value {
                toml::Value::Integer(v) => {
                    VlanId::try_from(*v).map_err(|_| ConfigError::InvalidVlanId {
                        value: v.to_string(),
                        reason: "must be a non-negative integer".to_string(),
                    })
                }
                toml::Value::String(s) => parse_vlan_id(s),
                other => Err(ConfigError::InvalidVlanId {
                    value: other.to_string(),
                    reason: "must be an integer".to_string(),
                }),
            };
            (key, new)
        })
        .collect())
}
