//! Decomposition-based synthesis of reversible functions.
//!
//! Young-subgroup decomposition (De Vos and Van Rentergem 2008). For each
//! variable `i` the permutation `π` is written as `π = L ∘ π' ∘ R` where `R`
//! and `L` are single-target gates with target `i` and `π'` leaves bit `i`
//! unchanged. Repeating for all variables leaves the identity, so
//!
//!   π = L_0 ∘ … ∘ L_{n-1} ∘ R_{n-1} ∘ … ∘ R_0
//!
//! and the circuit applies `R_0 … R_{n-1} L_{n-1} … L_0` in that order.
//!
//! The control functions come from a parity-constrained 2-colouring: input
//! `u` links the right node `u \ i` with the left node `π(u) \ i` and asks
//! `r(u \ i) ⊕ l(π(u) \ i) = u_i ⊕ π(u)_i`. Every node has degree two, the
//! graph is a union of even cycles and the constraints are always
//! satisfiable.

use revkit_ir::{Netlist, QubitId};
use revkit_logic::{Permutation, TruthTable};
use tracing::{debug, trace};

use crate::error::SynthResult;
use crate::stg::StgSynthesis;

/// Synthesize `perm` by decomposition, realizing each single-target gate
/// with `stg`.
pub fn dbs(perm: &Permutation, stg: &impl StgSynthesis) -> SynthResult<Netlist> {
    let num_vars = perm.num_vars();
    debug!(num_vars, "dbs");

    let mut current = perm.as_slice().to_vec();
    let mut right = Vec::with_capacity(num_vars as usize);
    let mut left = Vec::with_capacity(num_vars as usize);

    for var in 0..num_vars {
        let (r, l) = decompose(&current, var);
        current = (0..current.len() as u32)
            .map(|x| flip(current[flip(x, var, &r) as usize], var, &l))
            .collect();
        right.push(control_function(num_vars, var, &r)?);
        left.push(control_function(num_vars, var, &l)?);
    }
    debug_assert!(current.iter().enumerate().all(|(x, &y)| x as u32 == y));

    let mut netlist = Netlist::with_qubits("dbs", num_vars);
    for (var, function) in right.iter().enumerate() {
        append_stg(&mut netlist, stg, num_vars, var as u32, function)?;
    }
    for (var, function) in left.iter().enumerate().rev() {
        append_stg(&mut netlist, stg, num_vars, var as u32, function)?;
    }
    Ok(netlist)
}

/// Solve the colouring for variable `var`.
///
/// Both returned vectors are indexed by values with bit `var` cleared.
fn decompose(perm: &[u32], var: u32) -> (Vec<bool>, Vec<bool>) {
    let size = perm.len();
    let bit = 1u32 << var;
    let mut inverse = vec![0u32; size];
    for (x, &y) in perm.iter().enumerate() {
        inverse[y as usize] = x as u32;
    }
    let parity = |u: u32| (u & bit != 0) != (perm[u as usize] & bit != 0);

    let mut r: Vec<Option<bool>> = vec![None; size];
    let mut l: Vec<Option<bool>> = vec![None; size];
    // (is_left, key)
    let mut stack: Vec<(bool, u32)> = vec![];

    for start in (0..size as u32).filter(|k| k & bit == 0) {
        if r[start as usize].is_some() {
            continue;
        }
        r[start as usize] = Some(false);
        stack.push((false, start));

        while let Some((is_left, key)) = stack.pop() {
            if is_left {
                let value = l[key as usize].unwrap_or_default();
                for v in [key, key | bit] {
                    let u = inverse[v as usize];
                    let r_key = u & !bit;
                    if r[r_key as usize].is_none() {
                        r[r_key as usize] = Some(value != parity(u));
                        stack.push((false, r_key));
                    }
                }
            } else {
                let value = r[key as usize].unwrap_or_default();
                for u in [key, key | bit] {
                    let l_key = perm[u as usize] & !bit;
                    if l[l_key as usize].is_none() {
                        l[l_key as usize] = Some(value != parity(u));
                        stack.push((true, l_key));
                    }
                }
            }
        }
    }

    let solve = |side: Vec<Option<bool>>| -> Vec<bool> {
        side.into_iter().map(Option::unwrap_or_default).collect()
    };
    (solve(r), solve(l))
}

/// Apply the single-target gate `g` with target `var` to `x`.
fn flip(x: u32, var: u32, g: &[bool]) -> u32 {
    let bit = 1u32 << var;
    if g[(x & !bit) as usize] { x ^ bit } else { x }
}

/// Control function over the variables other than `var`, in increasing
/// order.
fn control_function(num_vars: u32, var: u32, g: &[bool]) -> SynthResult<TruthTable> {
    let low = (1u64 << var) - 1;
    let function = TruthTable::from_fn(num_vars - 1, |t| {
        let key = (t & low) | ((t & !low) << 1);
        g[key as usize]
    })?;
    Ok(function)
}

fn append_stg(
    netlist: &mut Netlist,
    stg: &impl StgSynthesis,
    num_vars: u32,
    var: u32,
    function: &TruthTable,
) -> SynthResult<()> {
    if function.is_const0() {
        return Ok(());
    }
    trace!(var, ones = function.count_ones(), "dbs single-target gate");
    let qubits: Vec<QubitId> = (0..num_vars)
        .filter(|&q| q != var)
        .chain(std::iter::once(var))
        .map(QubitId)
        .collect();
    stg.synthesize(netlist, &qubits, function)
}
