//! Phase-polynomial synthesis with CNOT and phase gates (GraySynth).
//!
//! Realizes the diagonal unitary
//!
//!   |x⟩ ↦ exp(i · Σ_t θ_t · (m_t · x mod 2)) |x⟩
//!
//! for a list of parity terms `(m_t, θ_t)`. Terms are tracked in the basis
//! of the parities currently held by the qubits; a CNOT with control `c` and
//! target `t` adds row `t` of every term into row `c`. A term whose
//! coefficient vector is the unit vector `e_q` is held by qubit `q` and is
//! emitted as `P(θ)` on that qubit.
//!
//! The traversal follows Amy, Azimzadeh and Mosca, "On the CNOT-complexity
//! of CNOT-phase circuits" (2018): the term set is split recursively on the
//! row with the most skewed distribution, and rows that are all-ones on the
//! current set are folded into the set's target. The accumulated linear map
//! is undone by Gauss-Jordan elimination at the end.

use revkit_ir::{Netlist, QubitId};
use revkit_logic::{LogicError, ParityTerms};
use tracing::{debug, trace};

use crate::error::{SynthError, SynthResult};

/// Parity masks are `u64`.
const MAX_QUBITS: usize = u64::BITS as usize;

/// Synthesize a fresh netlist over `num_vars` qubits for `terms`.
pub fn gray_synth(num_vars: u32, terms: &ParityTerms) -> SynthResult<Netlist> {
    let mut netlist = Netlist::with_qubits("gray_synth", num_vars);
    let qubits: Vec<QubitId> = (0..num_vars).map(QubitId).collect();
    append_gray_synth(&mut netlist, &qubits, terms)?;
    Ok(netlist)
}

/// Append the GraySynth circuit for `terms` to `netlist`.
///
/// Variable `i` of the terms lives on `qubits[i]`. The appended gates act as
/// the identity on basis states apart from the phase; terms with an empty
/// mask or a zero angle are skipped.
pub fn append_gray_synth(
    netlist: &mut Netlist,
    qubits: &[QubitId],
    terms: &ParityTerms,
) -> SynthResult<()> {
    let n = qubits.len();
    if n > MAX_QUBITS {
        return Err(SynthError::Logic(LogicError::TooManyVariables {
            got: u32::try_from(n).unwrap_or(u32::MAX),
            max: u64::BITS,
        }));
    }
    if terms.num_vars() as usize > n {
        return Err(SynthError::QubitCountMismatch {
            expected: terms.num_vars() as usize,
            got: n,
        });
    }

    debug!(num_qubits = n, num_terms = terms.len(), "gray_synth");

    let mut synth = GraySynth::new(netlist, qubits, terms);
    synth.emit_realized()?;
    synth.traverse()?;
    synth.fan_in_remaining()?;
    synth.restore_identity()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// A term that has not been emitted yet.
struct Pending {
    /// Coefficients in the current qubit basis.
    coeffs: u64,
    angle: f64,
    done: bool,
}

/// One entry of the traversal stack.
struct Frame {
    terms: Vec<usize>,
    rows: Vec<usize>,
    target: Option<usize>,
}

struct GraySynth<'a> {
    netlist: &'a mut Netlist,
    qubits: &'a [QubitId],
    /// Parity held by each qubit, over the input variables.
    state: Vec<u64>,
    terms: Vec<Pending>,
}

impl<'a> GraySynth<'a> {
    fn new(netlist: &'a mut Netlist, qubits: &'a [QubitId], terms: &ParityTerms) -> Self {
        let terms = terms
            .terms()
            .iter()
            .filter(|t| t.mask != 0 && t.angle != 0.0)
            .map(|t| Pending {
                coeffs: t.mask,
                angle: t.angle,
                done: false,
            })
            .collect();
        Self {
            netlist,
            qubits,
            state: (0..qubits.len()).map(|q| 1u64 << q).collect(),
            terms,
        }
    }

    fn is_pending(&self, term: usize) -> bool {
        !self.terms[term].done
    }

    /// Whether `row` is set in every pending term of `terms` (and at least
    /// one term is pending).
    fn all_ones(&self, terms: &[usize], row: usize) -> bool {
        let mut any = false;
        for &t in terms {
            let term = &self.terms[t];
            if term.done {
                continue;
            }
            if term.coeffs >> row & 1 == 0 {
                return false;
            }
            any = true;
        }
        any
    }

    /// Emit every pending term that is held by a single qubit.
    fn emit_realized(&mut self) -> SynthResult<()> {
        for term in &mut self.terms {
            if !term.done && term.coeffs.is_power_of_two() {
                let q = term.coeffs.trailing_zeros() as usize;
                self.netlist.p(term.angle, self.qubits[q])?;
                term.done = true;
            }
        }
        Ok(())
    }

    fn cnot(&mut self, control: usize, target: usize) -> SynthResult<()> {
        trace!(control, target, "gray_synth cnot");
        self.netlist
            .cx(self.qubits[control], self.qubits[target])?;
        self.state[target] ^= self.state[control];
        for term in &mut self.terms {
            if term.coeffs >> target & 1 == 1 {
                term.coeffs ^= 1 << control;
            }
        }
        self.emit_realized()
    }

    fn traverse(&mut self) -> SynthResult<()> {
        let n = self.qubits.len();
        let mut stack = vec![Frame {
            terms: (0..self.terms.len()).collect(),
            rows: (0..n).collect(),
            target: None,
        }];

        while let Some(Frame {
            terms,
            rows,
            target,
        }) = stack.pop()
        {
            if let Some(i) = target {
                while self.all_ones(&terms, i) {
                    let Some(j) = (0..n).find(|&j| j != i && self.all_ones(&terms, j)) else {
                        break;
                    };
                    self.cnot(j, i)?;
                }
            }

            let live: Vec<usize> = terms.into_iter().filter(|&t| self.is_pending(t)).collect();
            if live.is_empty() || rows.is_empty() {
                continue;
            }

            let (split, ones) = self.best_split(&live, &rows);
            let row = rows[split];
            let rest: Vec<usize> = rows
                .iter()
                .copied()
                .filter(|&r| r != row)
                .collect();

            let (with_one, with_zero): (Vec<usize>, Vec<usize>) = live
                .into_iter()
                .partition(|&t| self.terms[t].coeffs >> row & 1 == 1);
            debug_assert_eq!(with_one.len(), ones);

            stack.push(Frame {
                terms: with_one,
                rows: rest.clone(),
                target: target.or(Some(row)),
            });
            stack.push(Frame {
                terms: with_zero,
                rows: rest,
                target,
            });
        }
        Ok(())
    }

    /// Row of `rows` (by position) whose split of `terms` is most
    /// unbalanced, together with its number of ones. First row wins ties.
    fn best_split(&self, terms: &[usize], rows: &[usize]) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_score = 0;
        for (pos, &row) in rows.iter().enumerate() {
            let ones = terms
                .iter()
                .filter(|&&t| self.terms[t].coeffs >> row & 1 == 1)
                .count();
            let score = ones.max(terms.len() - ones);
            if pos == 0 || score > best_score {
                best = (pos, ones);
                best_score = score;
            }
        }
        best
    }

    /// Realize leftover terms by folding their support onto the lowest qubit.
    fn fan_in_remaining(&mut self) -> SynthResult<()> {
        for t in 0..self.terms.len() {
            while !self.terms[t].done {
                let coeffs = self.terms[t].coeffs;
                let target = coeffs.trailing_zeros() as usize;
                let control = (coeffs & !(1 << target)).trailing_zeros() as usize;
                self.cnot(control, target)?;
            }
        }
        Ok(())
    }

    /// Undo the accumulated linear map with CNOTs.
    fn restore_identity(&mut self) -> SynthResult<()> {
        let n = self.qubits.len();
        for col in 0..n {
            if self.state[col] >> col & 1 == 0 {
                // Invertibility guarantees a pivot below the diagonal.
                if let Some(r) = (col + 1..n).find(|&r| self.state[r] >> col & 1 == 1) {
                    self.cnot(r, col)?;
                }
            }
            for r in 0..n {
                if r != col && self.state[r] >> col & 1 == 1 {
                    self.cnot(col, r)?;
                }
            }
        }
        debug_assert!(self.state.iter().enumerate().all(|(q, &s)| s == 1 << q));
        Ok(())
    }
}
