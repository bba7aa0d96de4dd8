//! Reference simulators used by the integration tests.

#![allow(dead_code)]

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use revkit_ir::{Netlist, StandardGate};

/// Amplitude / phase tolerance.
pub const TOLERANCE: f64 = 1e-9;

/// Run `netlist` on the basis state `|input⟩` and return the final state.
///
/// Qubit `q` is bit `q` of the basis index.
pub fn run(netlist: &Netlist, input: usize) -> Vec<Complex64> {
    let size = 1usize << netlist.num_qubits();
    let mut state = vec![Complex64::new(0.0, 0.0); size];
    state[input] = Complex64::new(1.0, 0.0);

    for gate in netlist.gates() {
        let controls = gate
            .controls
            .iter()
            .fold(0usize, |mask, q| mask | 1 << q.index());
        let target = 1usize << gate.target.index();
        let active = |i: usize| i & controls == controls;

        match gate.kind {
            StandardGate::X => {
                for i in (0..size).filter(|&i| i & target == 0 && active(i)) {
                    state.swap(i, i | target);
                }
            }
            StandardGate::H => {
                for i in (0..size).filter(|&i| i & target == 0 && active(i)) {
                    let (a, b) = (state[i], state[i | target]);
                    state[i] = (a + b) * FRAC_1_SQRT_2;
                    state[i | target] = (a - b) * FRAC_1_SQRT_2;
                }
            }
            StandardGate::P(theta) => {
                let phase = Complex64::from_polar(1.0, theta);
                for i in (0..size).filter(|&i| i & target != 0 && active(i)) {
                    state[i] *= phase;
                }
            }
        }
    }
    state
}

/// Assert that `|input⟩` is mapped to `e^{i·phase}|output⟩`.
pub fn assert_basis_map(netlist: &Netlist, input: usize, output: usize, phase: f64) {
    let state = run(netlist, input);
    let expected = Complex64::from_polar(1.0, phase);
    for (i, amplitude) in state.iter().enumerate() {
        let want = if i == output {
            expected
        } else {
            Complex64::new(0.0, 0.0)
        };
        assert!(
            (amplitude - want).norm() < TOLERANCE,
            "input {input}: amplitude of |{i}⟩ is {amplitude}, expected {want}"
        );
    }
}

/// Run a netlist of `X`-family gates on a classical bit pattern.
pub fn run_classical(netlist: &Netlist, input: u64) -> u64 {
    assert!(netlist.is_classical(), "netlist contains non-classical gates");
    let mut state = input;
    for gate in netlist.gates() {
        if gate.controls.iter().all(|c| state >> c.0 & 1 == 1) {
            state ^= 1 << gate.target.0;
        }
    }
    state
}

/// The netlist with every non-CNOT gate removed, run classically.
pub fn run_cnot_skeleton(netlist: &Netlist, input: u64) -> u64 {
    let mut state = input;
    for gate in netlist.gates() {
        if gate.kind == StandardGate::X && gate.controls.iter().all(|c| state >> c.0 & 1 == 1) {
            state ^= 1 << gate.target.0;
        }
    }
    state
}
