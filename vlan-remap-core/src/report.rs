use serde::Serialize;

use crate::VlanId;

/// Which resolution tier produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementSource {
    /// Explicit entry in the mapping table.
    Mapping,
    /// Offset applied from the old range.
    Range,
}

/// One distinct old id that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRecord {
    pub old: VlanId,
    pub new: VlanId,
    pub source: ReplacementSource,
    /// Statements in the text that carried `old`.
    pub occurrences: usize,
}

/// Reconciliation of one substitution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Statements matched by the pattern, replaced or not.
    pub statements_seen: usize,
    /// Statements whose id was rewritten.
    pub statements_rewritten: usize,
    /// Mapping-sourced records, ascending by old id.
    pub mapping: Vec<ReplacementRecord>,
    /// Range-sourced records, ascending by old id.
    pub range: Vec<ReplacementRecord>,
    /// Mapping keys never seen in the text, ascending.
    pub unmatched_mapping_keys: Vec<VlanId>,
    /// Old-range ids never seen in the text, ascending.
    pub unmatched_range_ids: Vec<VlanId>,
}

impl Report {
    /// Distinct old ids replaced across both tiers.
    pub fn total_replaced(&self) -> usize {
        self.mapping.len() + self.range.len()
    }

    /// True when nothing was replaced. This is a normal outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.total_replaced() == 0
    }

    /// All records ordered by old id, regardless of tier.
    pub fn records(&self) -> Vec<&ReplacementRecord> {
        let mut all: Vec<&ReplacementRecord> = self.mapping.iter().chain(&self.range).collect();
        all.sort_by_key(|record| record.old);
        all
    }
}
