use crate::engine::Engine;
use crate::report::{ReplacementRecord, Report};
use crate::VlanId;

/// Replacement rows shown before the list is split into head and tail.
const PREVIEW_ROWS: usize = 10;
/// Unmatched ids shown in full before eliding the middle.
const UNMATCHED_IDS: usize = 20;

/// Format a report as the plain-text console summary.
///
/// The engine supplies the requested range for the "not found" heading.
pub fn format_text(report: &Report, engine: &Engine) -> String {
    let mut lines = Vec::new();

    if report.is_empty() {
        lines.push("No VLAN IDs were replaced.".to_string());
    } else {
        lines.push(format!(
            "Total replacements: {} VLAN IDs ({} statements)",
            report.total_replaced(),
            report.statements_rewritten
        ));
    }

    if !report.mapping.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Individual mappings applied: {}",
            report.mapping.len()
        ));
        push_preview(&mut lines, &report.mapping);
    }

    if !report.unmatched_mapping_keys.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "VLANs in mapping file not found in config: {}",
            report.unmatched_mapping_keys.len()
        ));
        lines.push(format!("  {}", format_id_list(&report.unmatched_mapping_keys)));
    }

    if !report.range.is_empty() {
        lines.push(String::new());
        lines.push(format!("Range-based replacements: {}", report.range.len()));
        push_preview(&mut lines, &report.range);
    }

    if !report.unmatched_range_ids.is_empty() {
        let heading = match engine.range() {
            Some(spec) => format!(
                "VLANs in range {}-{} not found in config: {}",
                spec.old_range().start(),
                spec.old_range().end(),
                report.unmatched_range_ids.len()
            ),
            None => format!(
                "VLANs in range not found in config: {}",
                report.unmatched_range_ids.len()
            ),
        };
        lines.push(String::new());
        lines.push(heading);
        lines.push(format!("  {}", format_id_list(&report.unmatched_range_ids)));
    }

    lines.join("\n")
}

/// Format a one-line summary of report counts.
pub fn format_summary(report: &Report) -> String {
    format!(
        "replaced={} mapping={} range={} statements_seen={} statements_rewritten={} unmatched_mapping={} unmatched_range={}",
        report.total_replaced(),
        report.mapping.len(),
        report.range.len(),
        report.statements_seen,
        report.statements_rewritten,
        report.unmatched_mapping_keys.len(),
        report.unmatched_range_ids.len()
    )
}

/// Head of up to ten rows, an elision line, then a tail of up to ten rows.
fn push_preview(lines: &mut Vec<String>, records: &[ReplacementRecord]) {
    if records.len() <= PREVIEW_ROWS {
        lines.extend(records.iter().map(format_record));
        return;
    }

    let tail_len = (records.len() - PREVIEW_ROWS).min(PREVIEW_ROWS);
    let hidden = records.len() - PREVIEW_ROWS - tail_len;

    lines.push("First 10:".to_string());
    lines.extend(records[..PREVIEW_ROWS].iter().map(format_record));
    if hidden > 0 {
        lines.push(format!("  ... ({hidden} more replacements)"));
    }
    lines.push(format!("Last {tail_len}:"));
    lines.extend(records[records.len() - tail_len..].iter().map(format_record));
}

fn format_record(record: &ReplacementRecord) -> String {
    format!("  {} -> {}", record.old, record.new)
}

fn format_id_list(ids: &[VlanId]) -> String {
    if ids.len() <= UNMATCHED_IDS {
        return join_ids(ids);
    }
    let head = &ids[..10];
    let tail = &ids[ids.len() - 10..];
    format!(
        "{}, ... ({} more) ..., {}",
        join_ids(head),
        ids.len() - 20,
        join_ids(tail)
    )
}

fn join_ids(ids: &[VlanId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
