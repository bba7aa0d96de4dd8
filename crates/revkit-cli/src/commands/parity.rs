//! Parity command implementation.

use anyhow::{Context, Result};
use tracing::debug;

use revkit_synth::synthesize_parity;

use super::common::{OutputArgs, announce, parse_angle, write_netlist};

/// Split a `BITS:ANGLE` argument.
fn parse_term(text: &str) -> Result<(&str, f64)> {
    let (bits, angle) = text
        .split_once(':')
        .with_context(|| format!("Expected BITS:ANGLE, got '{text}'"))?;
    Ok((bits.trim(), parse_angle(angle)?))
}

/// Execute the parity command.
pub fn execute(terms: &[String], out: &OutputArgs) -> Result<()> {
    let parsed = terms
        .iter()
        .map(|t| parse_term(t))
        .collect::<Result<Vec<_>>>()?;
    debug!(num_terms = parsed.len(), "parsed parity terms");

    announce("phase polynomial", format_args!("({} terms)", parsed.len()));
    let netlist = synthesize_parity(&parsed)?;
    write_netlist(netlist, None, out)
}
