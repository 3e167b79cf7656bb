//! End-to-end replacement run.
//!
//! Everything that can fail before a write happens first: mapping load,
//! range validation, engine configuration, the overwrite guard and reading
//! the input. Only then is the rewritten text written, so a failed run never
//! leaves a partial output file behind.

use std::fs;

use anyhow::{bail, Context, Result};
use vlan_remap_core::{format_summary, load_mapping_file, Engine, RangeSpec, VlanId};

use crate::cli::{Cli, OutputFormat};
use crate::path_guard::ensure_output_not_input;
use vlan_replacer::output_path::default_output_path;
use vlan_replacer::report::{render_banner, render_completion, render_report, RunSummary};

pub fn run_replace(args: Cli) -> Result<()> {
    let mapping = match &args.mapping_file {
        Some(path) => {
            let table = load_mapping_file(path)
                .with_context(|| format!("failed to load VLAN mappings from {}", path.display()))?;
            Some(table)
        }
        None => None,
    };
    let range = match (&args.old_range, &args.new_range) {
        (Some(old), Some(new)) => Some(RangeSpec::new(range_pair(old)?, range_pair(new)?)?),
        (None, None) => None,
        _ => bail!("both --old-range and --new-range must be provided together"),
    };
    let engine = Engine::configure(mapping, range)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    ensure_output_not_input(&output, &args.input)?;

    let text_mode = args.format == OutputFormat::Text && !args.quiet;
    if text_mode {
        println!("{}", render_banner(&engine));
        println!("Reading configuration from: {}", args.input.display());
    }

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    tracing::debug!(
        input = %args.input.display(),
        bytes = content.len(),
        "read configuration"
    );

    let (rewritten, report) = engine.apply(&content);

    fs::write(&output, &rewritten)
        .with_context(|| format!("failed to write output {}", output.display()))?;
    tracing::debug!(
        output = %output.display(),
        bytes = rewritten.len(),
        "wrote configuration"
    );
    tracing::debug!(summary = %format_summary(&report), "replacement finished");

    if args.quiet {
        return Ok(());
    }
    match args.format {
        OutputFormat::Text => {
            println!();
            println!("Configuration written to: {}", output.display());
            println!();
            println!("{}", render_report(&report, &engine));
            println!();
            println!("{}", render_completion());
        }
        OutputFormat::Json => {
            let summary = RunSummary {
                input: args.input.display().to_string(),
                output: output.display().to_string(),
                mode: engine.mode(),
                total_replaced: report.total_replaced(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn range_pair(values: &[VlanId]) -> Result<(VlanId, VlanId)> {
    match values {
        [start, end] => Ok((*start, *end)),
        _ => bail!("a range takes exactly two values (START END), got {}", values.len()),
    }
}
