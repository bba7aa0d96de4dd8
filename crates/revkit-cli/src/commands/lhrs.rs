//! Lhrs command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use revkit_synth::synthesize_network;

use super::common::{OutputArgs, announce, write_netlist};

/// Execute the lhrs command.
pub fn execute(input: &str, out: &OutputArgs) -> Result<()> {
    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("File not found: {input}");
    }

    announce("logic network", style(input).green());
    let (netlist, stats) = synthesize_network(path)?;
    eprintln!(
        "  Inputs on {:?}, outputs on {:?}, {} ancillae",
        stats.input_indexes, stats.output_indexes, stats.num_ancillae
    );

    write_netlist(netlist, Some(&stats), out)
}
