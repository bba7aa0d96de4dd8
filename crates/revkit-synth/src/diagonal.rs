//! Synthesis of diagonal unitaries.
//!
//! An angle vector `[θ_1, …, θ_{2^n-1}]` denotes
//! `diag(1, e^{-iθ_1}, …, e^{-iθ_{2^n-1}})`. The phase function is converted
//! to parity terms through its Walsh spectrum and realized with GraySynth.

use revkit_ir::{Netlist, QubitId};
use revkit_logic::{LogicError, MAX_VARS};
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::gray_synth::append_gray_synth;
use crate::walsh::phase_parity_terms;

/// Synthesize the diagonal unitary given by `angles`.
///
/// `angles.len()` must be `2^n - 1` for some `n >= 1` and every angle must
/// be finite; the resulting netlist has `n` qubits.
pub fn diagonal_synth(angles: &[f64]) -> SynthResult<Netlist> {
    let num_vars = angle_count_vars(angles.len())?;
    if let Some(index) = angles.iter().position(|a| !a.is_finite()) {
        return Err(SynthError::NonFiniteAngle { index });
    }
    debug!(num_vars, "diagonal_synth");

    let phases: Vec<f64> = std::iter::once(0.0)
        .chain(angles.iter().map(|a| -a))
        .collect();
    let terms = phase_parity_terms(num_vars, phases)?;

    let mut netlist = Netlist::with_qubits("diagonal", num_vars);
    let qubits: Vec<QubitId> = (0..num_vars).map(QubitId).collect();
    append_gray_synth(&mut netlist, &qubits, &terms)?;
    Ok(netlist)
}

/// `n` such that `count == 2^n - 1`.
fn angle_count_vars(count: usize) -> SynthResult<u32> {
    let size = count
        .checked_add(1)
        .ok_or(SynthError::InvalidAngleCount(count))?;
    if count == 0 || !size.is_power_of_two() {
        return Err(SynthError::InvalidAngleCount(count));
    }
    let num_vars = size.trailing_zeros();
    if num_vars > MAX_VARS {
        return Err(LogicError::TooManyVariables {
            got: num_vars,
            max: MAX_VARS,
        }
        .into());
    }
    Ok(num_vars)
}
