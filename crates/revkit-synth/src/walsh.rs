//! Walsh-Hadamard spectra of phase functions.

use revkit_logic::ParityTerms;

use crate::error::SynthResult;

/// Spectral coefficients below this magnitude are dropped.
pub(crate) const SPECTRUM_EPSILON: f64 = 1e-12;

/// In-place fast Walsh-Hadamard transform (unnormalized).
///
/// Afterwards `values[s] = Σ_x values[x] · (-1)^(s·x)`.
pub(crate) fn fwht(values: &mut [f64]) {
    let len = values.len();
    let mut half = 1;
    while half < len {
        for block in (0..len).step_by(2 * half) {
            for j in block..block + half {
                let (a, b) = (values[j], values[j + half]);
                values[j] = a + b;
                values[j + half] = a - b;
            }
        }
        half *= 2;
    }
}

/// Parity terms whose phase polynomial equals `phases[x] - phases[0]`.
///
/// With `c_s = 2^-n · Σ_x φ(x)(-1)^(s·x)` and `s·x mod 2 = (1 - (-1)^(s·x))/2`
/// the phase function is `φ(x) = φ(0) + Σ_{s≠0} -2c_s · (s·x mod 2)`.
pub(crate) fn phase_parity_terms(num_vars: u32, mut phases: Vec<f64>) -> SynthResult<ParityTerms> {
    fwht(&mut phases);
    let scale = 1.0 / phases.len() as f64;

    let mut terms = ParityTerms::with_num_vars(num_vars)?;
    for (s, coeff) in phases.iter().enumerate().skip(1) {
        let angle = -2.0 * coeff * scale;
        if angle.abs() >= SPECTRUM_EPSILON {
            terms.add_term(s as u64, angle)?;
        }
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fwht_of_delta() {
        let mut values = vec![1.0, 0.0, 0.0, 0.0];
        fwht(&mut values);
        assert_eq!(values, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_fwht_is_self_inverse_up_to_scale() {
        let original = vec![0.5, -1.0, 2.0, 0.0, 3.0, 1.5, -0.25, 4.0];
        let mut values = original.clone();
        fwht(&mut values);
        fwht(&mut values);
        for (a, b) in values.iter().zip(&original) {
            assert!((a / 8.0 - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_phase_terms_reproduce_phases() {
        let phases = vec![0.0, 0.3, -1.2, PI / 2.0];
        let terms = phase_parity_terms(2, phases.clone()).unwrap();
        for (x, phi) in phases.iter().enumerate() {
            assert!((terms.phase_of(x as u64) - phi).abs() < 1e-12);
        }
    }
}
