//! Transformation-based synthesis of reversible functions.
//!
//! Unidirectional variant of Miller, Maslov and Dueck (2003). Inputs are
//! visited in increasing order; whenever the current image `y` of `x`
//! differs from `x`, multiple-controlled Toffoli gates are applied on the
//! output side until `y = x`:
//!
//! 1. every bit in `x ∧ ¬y` is set, controlled on the 1-bits of the current `y`;
//! 2. every bit in `y ∧ ¬x` is cleared, controlled on the 1-bits of `x`.
//!
//! Neither step disturbs the images of smaller inputs, which are already
//! fixed points. The gates bring the permutation to the identity, so the
//! circuit is the gate list in reverse.

use revkit_ir::{Netlist, QubitId};
use revkit_logic::Permutation;
use tracing::{debug, trace};

use crate::error::SynthResult;

/// Synthesize `perm` with transformation-based synthesis.
///
/// The netlist has `perm.num_vars()` qubits and consists of `X`-family gates
/// only. The result is deterministic.
pub fn tbs(perm: &Permutation) -> SynthResult<Netlist> {
    let num_vars = perm.num_vars();
    debug!(num_vars, "tbs");

    let mut images = perm.as_slice().to_vec();
    let mut gates: Vec<(u32, u32)> = vec![];

    for x in 0..images.len() as u32 {
        let mut y = images[x as usize];
        if y == x {
            continue;
        }
        trace!(x, y, "tbs fixing input");

        for bit in bits(x & !y) {
            apply_toffoli(&mut images, y, bit, &mut gates);
            y |= 1 << bit;
        }
        for bit in bits(y & !x) {
            apply_toffoli(&mut images, x, bit, &mut gates);
        }
        debug_assert_eq!(images[x as usize], x);
    }

    let mut netlist = Netlist::with_qubits("tbs", num_vars);
    for &(controls, target) in gates.iter().rev() {
        netlist.mcx(bits(controls).map(QubitId), QubitId(target))?;
    }
    Ok(netlist)
}

/// Indices of the set bits of `value`, lowest first.
fn bits(value: u32) -> impl Iterator<Item = u32> {
    (0..u32::BITS).filter(move |b| value >> b & 1 == 1)
}

/// Flip bit `target` of every image that contains all of `controls`.
fn apply_toffoli(images: &mut [u32], controls: u32, target: u32, gates: &mut Vec<(u32, u32)>) {
    for image in images.iter_mut() {
        if *image & controls == controls {
            *image ^= 1 << target;
        }
    }
    gates.push((controls, target));
}
