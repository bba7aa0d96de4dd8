//! Single-target gate (STG) embedding.
//!
//! A single-target gate over a Boolean function `f` of arity `n` acts on
//! `n + 1` qubits as `|x⟩|y⟩ ↦ |x⟩|y ⊕ f(x)⟩`. The first `n` qubits are the
//! controls in variable order and the last one is the target.
//!
//! | Kind | Strategy | Gates |
//! |------|----------|-------|
//! | `spectrum` | Walsh spectrum of `π·(f(x) ∧ y)`, GraySynth between two `H` | `H`, `CX`, `P` |
//! | `pkrm` | Positive-polarity Reed-Muller form, one MCX per monomial | `X`, `MCX` |
//! | `pprm` | Best fixed-polarity Reed-Muller form over all polarities | `X`, `MCX` |

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use revkit_ir::{Netlist, QubitId};
use revkit_logic::TruthTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{SynthError, SynthResult};
use crate::gray_synth::append_gray_synth;
use crate::walsh::phase_parity_terms;

/// Largest arity accepted by [`PprmStg`], whose polarity search costs `4^n`.
pub const PPRM_MAX_VARS: u32 = 12;

/// A strategy that realizes single-target gates.
pub trait StgSynthesis {
    /// Append gates to `netlist` that XOR `function(controls)` into the
    /// target, where `qubits = [controls…, target]`.
    fn synthesize(
        &self,
        netlist: &mut Netlist,
        qubits: &[QubitId],
        function: &TruthTable,
    ) -> SynthResult<()>;
}

/// Selector for the built-in STG strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StgKind {
    /// Walsh-spectrum based phase synthesis.
    #[default]
    Spectrum,
    /// Positive-polarity Reed-Muller expansion.
    Pkrm,
    /// Minimum fixed-polarity Reed-Muller expansion.
    Pprm,
}

impl StgKind {
    /// All kinds, in declaration order.
    pub const ALL: [StgKind; 3] = [StgKind::Spectrum, StgKind::Pkrm, StgKind::Pprm];

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            StgKind::Spectrum => "spectrum",
            StgKind::Pkrm => "pkrm",
            StgKind::Pprm => "pprm",
        }
    }
}

impl fmt::Display for StgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StgKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spectrum" => Ok(StgKind::Spectrum),
            "pkrm" => Ok(StgKind::Pkrm),
            "pprm" => Ok(StgKind::Pprm),
            _ => Err(SynthError::UnknownStgKind(s.to_string())),
        }
    }
}

impl StgSynthesis for StgKind {
    fn synthesize(
        &self,
        netlist: &mut Netlist,
        qubits: &[QubitId],
        function: &TruthTable,
    ) -> SynthResult<()> {
        embed(*self, netlist, qubits, function)
    }
}

/// Append a single-target gate for `function` using the strategy `kind`.
pub fn embed(
    kind: StgKind,
    netlist: &mut Netlist,
    qubits: &[QubitId],
    function: &TruthTable,
) -> SynthResult<()> {
    match kind {
        StgKind::Spectrum => SpectrumStg.synthesize(netlist, qubits, function),
        StgKind::Pkrm => PkrmStg.synthesize(netlist, qubits, function),
        StgKind::Pprm => PprmStg.synthesize(netlist, qubits, function),
    }
}

fn check_qubits(qubits: &[QubitId], function: &TruthTable) -> SynthResult<()> {
    let expected = function.num_vars() as usize + 1;
    if qubits.len() != expected {
        return Err(SynthError::QubitCountMismatch {
            expected,
            got: qubits.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Spectrum
// ---------------------------------------------------------------------------

/// Phase-based STG: `H · diag(e^{iπ·f(x)·y}) · H` on the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumStg;

impl StgSynthesis for SpectrumStg {
    fn synthesize(
        &self,
        netlist: &mut Netlist,
        qubits: &[QubitId],
        function: &TruthTable,
    ) -> SynthResult<()> {
        check_qubits(qubits, function)?;
        let n = function.num_vars();
        debug!(num_vars = n, ones = function.count_ones(), "spectrum stg");

        let size = function.num_bits();
        // Variable n is the target.
        let phases: Vec<f64> = (0..2 * size)
            .map(|z| {
                let target = z >= size;
                if target && function.get_bit(z - size) { PI } else { 0.0 }
            })
            .collect();
        let terms = phase_parity_terms(n + 1, phases)?;
        trace!(num_terms = terms.len(), "spectrum stg terms");

        let target = qubits[n as usize];
        netlist.h(target)?;
        append_gray_synth(netlist, qubits, &terms)?;
        netlist.h(target)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reed-Muller expansions
// ---------------------------------------------------------------------------

/// Algebraic normal form of `f(x ⊕ polarity)`: `anf[m]` is the coefficient
/// of the monomial whose variables are the bits of `m`.
fn anf(function: &TruthTable, polarity: u64) -> Vec<bool> {
    let mut coeffs: Vec<bool> = (0..function.num_bits())
        .map(|x| function.get_bit(x ^ polarity))
        .collect();
    for var in 0..function.num_vars() {
        let bit = 1usize << var;
        for x in 0..coeffs.len() {
            if x & bit != 0 {
                coeffs[x] ^= coeffs[x ^ bit];
            }
        }
    }
    coeffs
}

/// One MCX per monomial, in increasing monomial order.
fn emit_monomials(netlist: &mut Netlist, qubits: &[QubitId], coeffs: &[bool]) -> SynthResult<()> {
    let (target, controls) = qubits.split_last().ok_or(SynthError::QubitCountMismatch {
        expected: 1,
        got: 0,
    })?;
    for (monomial, _) in coeffs.iter().enumerate().filter(|(_, c)| **c) {
        let monomial_controls = controls
            .iter()
            .enumerate()
            .filter(|(var, _)| monomial >> var & 1 == 1)
            .map(|(_, q)| *q);
        netlist.mcx(monomial_controls, *target)?;
    }
    Ok(())
}

/// Positive-polarity Reed-Muller STG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PkrmStg;

impl StgSynthesis for PkrmStg {
    fn synthesize(
        &self,
        netlist: &mut Netlist,
        qubits: &[QubitId],
        function: &TruthTable,
    ) -> SynthResult<()> {
        check_qubits(qubits, function)?;
        let coeffs = anf(function, 0);
        debug!(
            num_vars = function.num_vars(),
            num_terms = coeffs.iter().filter(|c| **c).count(),
            "pkrm stg"
        );
        emit_monomials(netlist, qubits, &coeffs)
    }
}

/// Fixed-polarity Reed-Muller STG with the fewest monomials.
///
/// All `2^n` polarity vectors are evaluated, so the cost grows as `4^n`.
/// Functions with more than [`PPRM_MAX_VARS`] variables are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PprmStg;

impl StgSynthesis for PprmStg {
    fn synthesize(
        &self,
        netlist: &mut Netlist,
        qubits: &[QubitId],
        function: &TruthTable,
    ) -> SynthResult<()> {
        check_qubits(qubits, function)?;
        if function.num_vars() > PPRM_MAX_VARS {
            return Err(SynthError::PolaritySearchTooLarge {
                num_vars: function.num_vars(),
                max: PPRM_MAX_VARS,
            });
        }

        let mut best_polarity = 0;
        let mut best = anf(function, 0);
        let mut best_count = best.iter().filter(|c| **c).count();
        for polarity in 1..function.num_bits() {
            let coeffs = anf(function, polarity);
            let count = coeffs.iter().filter(|c| **c).count();
            if count < best_count {
                best_polarity = polarity;
                best = coeffs;
                best_count = count;
            }
        }
        debug!(
            num_vars = function.num_vars(),
            polarity = best_polarity,
            num_terms = best_count,
            "pprm stg"
        );

        let negated: Vec<QubitId> = (0..function.num_vars() as usize)
            .filter(|var| best_polarity >> var & 1 == 1)
            .map(|var| qubits[var])
            .collect();
        for &q in &negated {
            netlist.x(q)?;
        }
        emit_monomials(netlist, qubits, &best)?;
        for &q in &negated {
            netlist.x(q)?;
        }
        Ok(())
    }
}
