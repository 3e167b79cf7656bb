use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ConfigError;
use crate::mapping::MappingTable;
use crate::range::RangeSpec;
use crate::report::{ReplacementRecord, ReplacementSource, Report};
use crate::VlanId;

/// Statement keyword, blank run, then the id. Only the id group is rewritten.
const STATEMENT_PATTERN: &str = r"set vlanid[ \t]+([0-9]+)";

fn statement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(STATEMENT_PATTERN).expect("statement pattern is valid"))
}

/// Which replacement methods an engine was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Mapping,
    Range,
    /// Both; mapping entries win over the range offset.
    Combined,
}

/// A validated, immutable substitution configuration.
///
/// `apply` borrows the engine immutably, so one engine can rewrite many
/// texts, including from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    mapping: Option<MappingTable>,
    range: Option<RangeSpec>,
}

impl Engine {
    /// Validate the replacement inputs. An empty mapping table counts as absent.
    pub fn configure(
        mapping: Option<MappingTable>,
        range: Option<RangeSpec>,
    ) -> Result<Self, ConfigError> {
        let mapping = mapping.filter(|table| !table.is_empty());
        if mapping.is_none() && range.is_none() {
            return Err(ConfigError::NoReplacementMethod);
        }
        if let Some(spec) = &range {
            spec.validate()?;
        }

        let engine = Self { mapping, range };
        tracing::debug!(
            mode = ?engine.mode(),
            mapping_entries = engine.mapping.as_ref().map_or(0, MappingTable::len),
            offset = engine.range.as_ref().map(RangeSpec::offset),
            "configured VLAN substitution engine"
        );
        Ok(engine)
    }

    pub fn mapping(&self) -> Option<&MappingTable> {
        self.mapping.as_ref()
    }

    pub fn range(&self) -> Option<&RangeSpec> {
        self.range.as_ref()
    }

    pub fn mode(&self) -> Mode {
        match (&self.mapping, &self.range) {
            (Some(_), Some(_)) => Mode::Combined,
            (None, Some(_)) => Mode::Range,
            _ => Mode::Mapping,
        }
    }

    /// Resolve one id: mapping first, then range, else `None` (left untouched).
    pub fn resolve(&self, id: VlanId) -> Option<(VlanId, ReplacementSource)> {
        if let Some(new) = self.mapping.as_ref().and_then(|table| table.get(id)) {
            return Some((new, ReplacementSource::Mapping));
        }
        self.range
            .as_ref()
            .and_then(|spec| spec.translate(id))
            .map(|new| (new, ReplacementSource::Range))
    }

    /// Rewrite every `set vlanid <n>` statement in one forward pass.
    ///
    /// Text outside the id digits is copied through byte for byte, and the
    /// produced output is never scanned again.
    pub fn apply(&self, text: &str) -> (String, Report) {
        let mut out = String::with_capacity(text.len());
        let mut tally = Tally::default();
        let mut copied_to = 0;

        for caps in statement_pattern().captures_iter(text) {
            let Some(digits) = caps.get(1) else {
                continue;
            };
            tally.seen += 1;

            // Ids too large for a VlanId cannot be in any table or range.
            let Ok(old) = digits.as_str().parse::<VlanId>() else {
                continue;
            };
            let Some((new, source)) = self.resolve(old) else {
                continue;
            };

            out.push_str(&text[copied_to..digits.start()]);
            let _ = write!(out, "{new}");
            copied_to = digits.end();
            tally.record(old, new, source);
        }
        out.push_str(&text[copied_to..]);

        let report = tally.into_report(self);
        tracing::debug!(
            statements_seen = report.statements_seen,
            statements_rewritten = report.statements_rewritten,
            distinct_ids = report.total_replaced(),
            "applied VLAN substitution"
        );
        (out, report)
    }
}

/// Per-call accumulator, keyed by old id.
#[derive(Default)]
struct Tally {
    seen: usize,
    rewritten: usize,
    records: BTreeMap<VlanId, ReplacementRecord>,
}

impl Tally {
    fn record(&mut self, old: VlanId, new: VlanId, source: ReplacementSource) {
        self.rewritten += 1;
        self.records
            .entry(old)
            .or_insert(ReplacementRecord {
                old,
                new,
                source,
                occurrences: 0,
            })
            .occurrences += 1;
    }

    fn into_report(self, engine: &Engine) -> Report {
        let unmatched_mapping_keys = engine
            .mapping
            .as_ref()
            .map(|table| {
                table
                    .keys()
                    .filter(|key| !self.records.contains_key(key))
                    .collect()
            })
            .unwrap_or_default();
        let unmatched_range_ids = engine
            .range
            .as_ref()
            .map(|spec| {
                spec.old_range()
                    .filter(|id| !self.records.contains_key(id))
                    .collect()
            })
            .unwrap_or_default();

        let (mapping, range): (Vec<_>, Vec<_>) = self
            .records
            .into_values()
            .partition(|record| record.source == ReplacementSource::Mapping);

        Report {
            statements_seen: self.seen,
            statements_rewritten: self.rewritten,
            mapping,
            range,
            unmatched_mapping_keys,
            unmatched_range_ids,
        }
    }
}
