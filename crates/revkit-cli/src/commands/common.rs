//! Shared helpers for CLI commands.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fs;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;

use revkit_ir::Netlist;
use revkit_synth::LhrsStats;

/// How a synthesized netlist is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable gate list
    #[default]
    Text,
    /// Netlist, gate counts and statistics as JSON
    Json,
}

/// Output options shared by all synthesis commands.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", env = "REVKIT_FORMAT")]
    pub format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the inverse netlist (gates reversed, phases negated)
    #[arg(long)]
    pub inverse: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    netlist: &'a Netlist,
    gate_counts: BTreeMap<String, usize>,
    classical: bool,
    phase_gates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a LhrsStats>,
}

/// Parse an angle given either as a plain number or as a multiple of pi.
///
/// Accepted forms: `0.5`, `-1e-3`, `pi`, `-pi/2`, `3pi/4`, `3*pi/4`.
pub fn parse_angle(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        anyhow::ensure!(value.is_finite(), "Angle is not finite: '{text}'");
        return Ok(value);
    }

    let lower = trimmed.to_lowercase();
    let (negative, body) = match lower.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lower.as_str()),
    };
    let Some(pi_at) = body.find("pi") else {
        anyhow::bail!("Invalid angle: '{text}'");
    };

    let factor = match body[..pi_at].trim_end_matches('*') {
        "" => 1.0,
        digits => digits
            .parse::<f64>()
            .with_context(|| format!("Invalid multiplier in angle: '{text}'"))?,
    };
    let divisor = match &body[pi_at + 2..] {
        "" => 1.0,
        rest => {
            let digits = rest
                .strip_prefix('/')
                .with_context(|| format!("Invalid angle: '{text}'"))?;
            digits
                .parse::<f64>()
                .with_context(|| format!("Invalid divisor in angle: '{text}'"))?
        }
    };
    anyhow::ensure!(divisor != 0.0, "Division by zero in angle: '{text}'");

    let value = factor * PI / divisor;
    Ok(if negative { -value } else { value })
}

/// Print a progress line on stderr so stdout stays clean for the netlist.
pub fn announce(what: &str, detail: impl std::fmt::Display) {
    eprintln!(
        "{} Synthesizing {} {}",
        style("→").cyan().bold(),
        style(what).green(),
        detail
    );
}

/// Write a netlist, or its inverse, in the requested format to a file or stdout.
pub fn write_netlist(netlist: Netlist, stats: Option<&LhrsStats>, out: &OutputArgs) -> Result<()> {
    let netlist = if out.inverse {
        netlist.inverse()
    } else {
        netlist
    };
    let netlist = &netlist;

    let rendered = match out.format {
        OutputFormat::Text => netlist.to_string(),
        OutputFormat::Json => {
            let report = Report {
                netlist,
                gate_counts: netlist.count_ops().into_iter().collect(),
                classical: netlist.is_classical(),
                phase_gates: netlist.num_phase_gates(),
                stats,
            };
            let mut json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize netlist")?;
            json.push('\n');
            json
        }
    };

    match out.output.as_deref() {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("Failed to write file: {path}"))?;
            eprintln!(
                "{} {} qubits, {} gates written to {}",
                style("✓").green().bold(),
                netlist.num_qubits(),
                netlist.num_gates(),
                style(path).green()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
