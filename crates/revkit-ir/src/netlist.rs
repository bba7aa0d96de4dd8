//! High-level netlist builder API.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::qubit::{Qubit, QubitId};

/// An ordered sequence of gates over a growing qubit register.
///
/// Qubits are allocated one at a time and never released. Gates may only
/// reference qubits that were allocated before the gate was appended, and
/// gate order is preserved exactly as inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Netlist {
    /// Name of the netlist.
    name: String,
    /// Allocated qubits, indexed by id.
    qubits: Vec<Qubit>,
    /// Gates in application order.
    gates: Vec<Gate>,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            gates: vec![],
        }
    }

    /// Create a netlist with `num_qubits` unnamed qubits.
    pub fn with_qubits(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut netlist = Self::new(name);
        for _ in 0..num_qubits {
            netlist.add_qubit();
        }
        netlist
    }

    /// Allocate a single qubit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId::from(self.qubits.len());
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Allocate a named register of `size` qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = Vec::with_capacity(size as usize);
        for i in 0..size {
            let id = QubitId::from(self.qubits.len());
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Append a gate after validating its operands.
    pub fn apply(&mut self, gate: Gate) -> IrResult<&mut Self> {
        self.validate(&gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    fn validate(&self, gate: &Gate) -> IrResult<()> {
        for qubit in gate.qubits() {
            if qubit.index() >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: Some(gate.name()),
                });
            }
        }
        let mut seen = FxHashSet::default();
        for &control in &gate.controls {
            if control == gate.target {
                return Err(IrError::TargetIsControl {
                    qubit: control,
                    gate_name: gate.name(),
                });
            }
            if !seen.insert(control) {
                return Err(IrError::DuplicateQubit {
                    qubit: control,
                    gate_name: Some(gate.name()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // X family
    // =========================================================================

    /// Apply a NOT gate.
    pub fn x(&mut self, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::new(StandardGate::X, target))
    }

    /// Apply a CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::controlled(StandardGate::X, [control], target))
    }

    /// Apply a Toffoli gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::controlled(StandardGate::X, [c1, c2], target))
    }

    /// Apply a NOT gate controlled on any number of qubits.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Gate::controlled(StandardGate::X, controls, target))
    }

    // =========================================================================
    // Other gates
    // =========================================================================

    /// Apply a Hadamard gate.
    pub fn h(&mut self, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::new(StandardGate::H, target))
    }

    /// Apply a phase gate.
    pub fn p(&mut self, theta: f64, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::new(StandardGate::P(theta), target))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the netlist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of allocated qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Get the allocated qubits.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Ids of the qubits belonging to a named register, in register order.
    pub fn register(&self, name: &str) -> Vec<QubitId> {
        self.qubits
            .iter()
            .filter(|q| q.register.as_deref() == Some(name))
            .map(|q| q.id)
            .collect()
    }

    /// Count gates by name (`cx`, `ccx`, `p`, ...).
    pub fn count_ops(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether every gate is from the X family, i.e. the netlist is a
    /// reversible classical circuit.
    pub fn is_classical(&self) -> bool {
        self.gates.iter().all(Gate::is_classical)
    }

    /// Number of gates that are diagonal in the computational basis.
    pub fn num_phase_gates(&self) -> usize {
        self.gates.iter().filter(|g| g.kind.is_diagonal()).count()
    }

    /// The inverse netlist: same qubits, gates reversed and inverted.
    pub fn inverse(&self) -> Self {
        Self {
            name: format!("{}_inverse", self.name),
            qubits: self.qubits.clone(),
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
        }
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// {}: {} qubits, {} gates",
            self.name,
            self.qubits.len(),
            self.gates.len()
        )?;
        for gate in &self.gates {
            writeln!(f, "{gate};")?;
        }
        Ok(())
    }
}
