//! Oracle command implementation.

use anyhow::Result;

use revkit_logic::TruthTable;
use revkit_synth::{StgKind, synthesize_oracle};

use super::common::{OutputArgs, announce, write_netlist};

/// Read a truth table from its binary form, or from hex when `vars` is given.
pub fn parse_function(function: &str, vars: Option<u32>) -> Result<TruthTable> {
    let table = match vars {
        Some(num_vars) => TruthTable::from_hex(num_vars, function)?,
        None => TruthTable::from_binary(function)?,
    };
    Ok(table)
}

/// Execute the oracle command.
pub fn execute(
    function: &str,
    vars: Option<u32>,
    kind: StgKind,
    out: &OutputArgs,
) -> Result<()> {
    let table = parse_function(function, vars)?;
    announce(
        "single-target gate",
        format_args!("over {} variables with {kind}", table.num_vars()),
    );

    let netlist = synthesize_oracle(&table, kind)?;
    write_netlist(netlist, None, out)
}
