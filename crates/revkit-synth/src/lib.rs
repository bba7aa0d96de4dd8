//! revkit Synthesis Algorithms
//!
//! Turns high-level descriptions of Boolean or diagonal transformations into
//! `revkit_ir::Netlist`s:
//!
//! | Input | Entry point | Algorithm |
//! |-------|-------------|-----------|
//! | parity terms | [`synthesize_parity`] | GraySynth |
//! | truth table | [`synthesize_oracle`] | single-target gate ([`StgKind`]) |
//! | angle vector | [`synthesize_diagonal`] | Walsh spectrum + GraySynth |
//! | permutation | [`synthesize_permutation_dbs`] | decomposition-based synthesis |
//! | permutation | [`synthesize_permutation_tbs`] | transformation-based synthesis |
//! | Verilog file | [`synthesize_network`] | Bennett-style LHRS |
//!
//! Every entry point validates its input before emitting any gate and
//! returns a fresh netlist.
//!
//! # Quick start
//!
//! ```rust
//! use revkit_logic::TruthTable;
//! use revkit_synth::{StgKind, synthesize_oracle, synthesize_permutation_tbs};
//!
//! // |a⟩|b⟩|y⟩ ↦ |a⟩|b⟩|y ⊕ ab⟩
//! let and = TruthTable::from_binary("1000").unwrap();
//! let toffoli = synthesize_oracle(&and, StgKind::Pkrm).unwrap();
//! assert_eq!(toffoli.num_qubits(), 3);
//! assert_eq!(toffoli.num_gates(), 1);
//!
//! let swap01 = synthesize_permutation_tbs(&[1, 0, 2, 3]).unwrap();
//! assert!(swap01.is_classical());
//! ```

pub mod dbs;
pub mod diagonal;
pub mod error;
pub mod gray_synth;
pub mod lhrs;
pub mod stg;
pub mod tbs;
mod walsh;

use std::path::Path;

use revkit_ir::{Netlist, QubitId};
use revkit_logic::{ParityTerms, Permutation, TruthTable};
use tracing::debug;

pub use dbs::dbs;
pub use diagonal::diagonal_synth;
pub use error::{SynthError, SynthResult};
pub use gray_synth::{append_gray_synth, gray_synth};
pub use lhrs::{
    BennettSynthesizer, LhrsStats, NetworkReader, NetworkSynthesizer, VerilogReader, lhrs,
};
pub use stg::{PPRM_MAX_VARS, PkrmStg, PprmStg, SpectrumStg, StgKind, StgSynthesis};
pub use tbs::tbs;

/// Synthesize a phase polynomial given as `(bit-string, angle)` pairs.
///
/// Character `i` of a bit-string set to `1` puts variable `i` in the parity.
/// Basis state `x` receives the phase `Σ angle` over all terms with odd
/// parity on `x`. An empty list yields an empty netlist without qubits.
pub fn synthesize_parity(terms: &[(&str, f64)]) -> SynthResult<Netlist> {
    let terms = ParityTerms::from_bitstrings(terms.iter().copied())?;
    debug!(num_vars = terms.num_vars(), num_terms = terms.len(), "synthesize_parity");
    let mut netlist = Netlist::with_qubits("parity", terms.num_vars());
    let qubits: Vec<QubitId> = (0..terms.num_vars()).map(QubitId).collect();
    append_gray_synth(&mut netlist, &qubits, &terms)?;
    Ok(netlist)
}

/// Synthesize the single-target gate `|x⟩|y⟩ ↦ |x⟩|y ⊕ f(x)⟩`.
///
/// The netlist has `num_vars + 1` qubits; the last one is the target.
/// [`StgKind::Pprm`] searches all `2^n` polarities at `O(4^n)` cost and
/// fails with [`SynthError::PolaritySearchTooLarge`] above
/// [`PPRM_MAX_VARS`] variables.
pub fn synthesize_oracle(function: &TruthTable, kind: StgKind) -> SynthResult<Netlist> {
    let num_vars = function.num_vars();
    debug!(num_vars, %kind, "synthesize_oracle");
    let mut netlist = Netlist::with_qubits("oracle", num_vars + 1);
    let qubits: Vec<QubitId> = (0..=num_vars).map(QubitId).collect();
    stg::embed(kind, &mut netlist, &qubits, function)?;
    Ok(netlist)
}

/// Synthesize `diag(1, e^{-iθ_1}, …, e^{-iθ_{2^n-1}})`.
pub fn synthesize_diagonal(angles: &[f64]) -> SynthResult<Netlist> {
    diagonal_synth(angles)
}

/// Synthesize a permutation with decomposition-based synthesis.
pub fn synthesize_permutation_dbs(perm: &[u32], kind: StgKind) -> SynthResult<Netlist> {
    let perm = Permutation::try_from(perm)?;
    dbs(&perm, &kind)
}

/// Synthesize a permutation with transformation-based synthesis.
pub fn synthesize_permutation_tbs(perm: &[u32]) -> SynthResult<Netlist> {
    let perm = Permutation::try_from(perm)?;
    tbs(&perm)
}

/// Read a structural Verilog file and compile it with the Bennett strategy.
pub fn synthesize_network(source_path: impl AsRef<Path>) -> SynthResult<(Netlist, LhrsStats)> {
    synthesize_network_with(source_path, &VerilogReader, &BennettSynthesizer)
}

/// Read a network with `reader` and compile it with `synthesizer`.
pub fn synthesize_network_with(
    source_path: impl AsRef<Path>,
    reader: &impl NetworkReader,
    synthesizer: &impl NetworkSynthesizer,
) -> SynthResult<(Netlist, LhrsStats)> {
    let network = reader.read(source_path.as_ref())?;
    lhrs(&network, synthesizer)
}
