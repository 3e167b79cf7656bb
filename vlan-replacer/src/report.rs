use colored::Colorize;
use serde::Serialize;
use vlan_remap_core::{format_text, Engine, Mode, Report};

const RULE: &str = "============================================================";

/// Render the run header: title plus the active replacement methods.
pub fn render_banner(engine: &Engine) -> String {
    let mut out = Vec::new();
    out.push(RULE.to_string());
    out.push(
        "  Fortigate Configuration VLAN ID Replacement Tool"
            .bold()
            .to_string(),
    );
    out.push(RULE.to_string());

    if let Some(table) = engine.mapping() {
        out.push(format!("Individual mappings: {} VLANs", table.len()));
    }
    if let Some(spec) = engine.range() {
        out.push(format!(
            "Old range: {}-{} ({} VLANs)",
            spec.old_range().start(),
            spec.old_range().end(),
            spec.size()
        ));
        out.push(format!(
            "New range: {}-{} ({} VLANs)",
            spec.new_range().start(),
            spec.new_range().end(),
            spec.size()
        ));
        out.push(format!("Offset: {:+}", spec.offset()));
    }
    if engine.mode() == Mode::Combined {
        out.push(String::new());
        out.push("Mode: Combined (individual mappings take precedence)".to_string());
    }
    out.push(RULE.to_string());
    out.join("\n")
}

/// Render the replacement summary for terminal output.
pub fn render_report(report: &Report, engine: &Engine) -> String {
    let raw = format_text(report, engine);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.contains(" -> ") {
            line.green().to_string()
        } else if line.contains("not found in config") || line.starts_with("No VLAN IDs") {
            line.yellow().to_string()
        } else if line.starts_with("Total replacements") {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render the closing status block.
pub fn render_completion() -> String {
    [
        RULE.to_string(),
        "Replacement completed successfully!".green().to_string(),
        RULE.to_string(),
    ]
    .join("\n")
}

/// Machine-readable result of one run.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub input: String,
    pub output: String,
    pub mode: Mode,
    pub total_replaced: usize,
    pub report: &'a Report,
}
