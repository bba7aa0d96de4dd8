//! Gate types.
//!
//! Every gate in a netlist has exactly one target qubit and an arbitrary
//! (possibly empty) set of control qubits. The operation applied to the target
//! is a [`StandardGate`]; it is applied only when all controls are `|1⟩`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Operations that can be applied to a gate's target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X (NOT). With controls: CNOT, Toffoli, multi-controlled NOT.
    X,
    /// Hadamard gate.
    H,
    /// Phase gate `diag(1, e^{iθ})`. With controls: controlled phase.
    P(f64),
}

impl StandardGate {
    /// Base name of the operation, without control prefixes.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::P(_) => "p",
        }
    }

    /// The inverse operation.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            StandardGate::X | StandardGate::H => *self,
            StandardGate::P(theta) => StandardGate::P(-theta),
        }
    }

    /// Whether the operation is diagonal in the computational basis.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        matches!(self, StandardGate::P(_))
    }

    /// Rotation angle of a phase gate.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::P(theta) => Some(*theta),
            _ => None,
        }
    }
}

/// A gate acting on one target, conditioned on a set of controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The operation applied to the target.
    pub kind: StandardGate,
    /// Control qubits, in the order they were given.
    pub controls: Vec<QubitId>,
    /// The target qubit.
    pub target: QubitId,
}

impl Gate {
    /// Create an uncontrolled gate.
    pub fn new(kind: StandardGate, target: QubitId) -> Self {
        Self {
            kind,
            controls: vec![],
            target,
        }
    }

    /// Create a controlled gate.
    pub fn controlled(
        kind: StandardGate,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> Self {
        Self {
            kind,
            controls: controls.into_iter().collect(),
            target,
        }
    }

    /// Gate name in the usual `x`/`cx`/`ccx`/`mcx` convention.
    pub fn name(&self) -> String {
        let base = self.kind.name();
        match self.controls.len() {
            0 => base.to_string(),
            1 => format!("c{base}"),
            2 => format!("cc{base}"),
            _ => format!("mc{base}"),
        }
    }

    /// Number of qubits the gate touches.
    pub fn num_qubits(&self) -> usize {
        self.controls.len() + 1
    }

    /// All qubits of the gate, controls first.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls
            .iter()
            .copied()
            .chain(std::iter::once(self.target))
    }

    /// The inverse gate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            kind: self.kind.inverse(),
            controls: self.controls.clone(),
            target: self.target,
        }
    }

    /// Whether the gate maps basis states to basis states (X family).
    pub fn is_classical(&self) -> bool {
        matches!(self.kind, StandardGate::X)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let StandardGate::P(theta) = self.kind {
            write!(f, "({theta})")?;
        }
        let qubits: Vec<String> = self.qubits().map(|q| q.to_string()).collect();
        write!(f, " {}", qubits.join(", "))
    }
}
