//! Permutation commands (`dbs` and `tbs`).

use anyhow::Result;

use revkit_synth::{StgKind, synthesize_permutation_dbs, synthesize_permutation_tbs};

use super::common::{OutputArgs, announce, write_netlist};

/// Execute the dbs command.
pub fn execute_dbs(perm: &[u32], kind: StgKind, out: &OutputArgs) -> Result<()> {
    announce(
        "permutation",
        format_args!("of {} values (dbs, {kind})", perm.len()),
    );
    let netlist = synthesize_permutation_dbs(perm, kind)?;
    write_netlist(netlist, None, out)
}

/// Execute the tbs command.
pub fn execute_tbs(perm: &[u32], out: &OutputArgs) -> Result<()> {
    announce("permutation", format_args!("of {} values (tbs)", perm.len()));
    let netlist = synthesize_permutation_tbs(perm)?;
    write_netlist(netlist, None, out)
}
