//! Diagonal command implementation.

use anyhow::Result;

use revkit_synth::synthesize_diagonal;

use super::common::{OutputArgs, announce, parse_angle, write_netlist};

/// Execute the diagonal command.
pub fn execute(angles: &[String], out: &OutputArgs) -> Result<()> {
    let angles = angles
        .iter()
        .map(|a| parse_angle(a))
        .collect::<Result<Vec<_>>>()?;

    announce("diagonal unitary", format_args!("({} angles)", angles.len()));
    let netlist = synthesize_diagonal(&angles)?;
    write_netlist(netlist, None, out)
}
