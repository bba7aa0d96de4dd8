//! LUT-based hierarchical reversible synthesis of logic networks.
//!
//! The compiler is split into two collaborators: a [`NetworkReader`] that
//! turns a file into a [`LogicNetwork`], and a [`NetworkSynthesizer`] that
//! maps the network onto a netlist and reports which qubits carry the
//! primary inputs and outputs.
//!
//! The default synthesizer follows the Bennett strategy: every gate node gets
//! its own ancilla, nodes are computed in topological order, outputs are
//! copied out, and the nodes are uncomputed in reverse order so that all
//! ancillae return to `|0⟩`.

use std::path::Path;

use revkit_ir::{Netlist, QubitId};
use revkit_logic::{LogicNetwork, Node, NodeId, Signal};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SynthError, SynthResult};

/// Register holding the primary inputs.
pub const INPUTS_REGISTER: &str = "inputs";
/// Register holding one ancilla per gate node.
pub const ANCILLAE_REGISTER: &str = "ancillae";
/// Register holding the primary outputs.
pub const OUTPUTS_REGISTER: &str = "outputs";

/// Qubit bookkeeping of a network synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LhrsStats {
    /// Qubit index of each primary input, in input order.
    pub input_indexes: Vec<u32>,
    /// Qubit index of each primary output, in output order.
    pub output_indexes: Vec<u32>,
    /// Number of ancilla qubits used.
    #[serde(skip)]
    pub num_ancillae: usize,
}

impl LhrsStats {
    /// Map-style access by entry name (`input_indexes` or `output_indexes`).
    pub fn get(&self, key: &str) -> Option<&[u32]> {
        match key {
            "input_indexes" => Some(&self.input_indexes),
            "output_indexes" => Some(&self.output_indexes),
            _ => None,
        }
    }
}

/// Reads a logic network from a file.
pub trait NetworkReader {
    /// Read and parse the network stored at `path`.
    fn read(&self, path: &Path) -> SynthResult<LogicNetwork>;
}

/// Maps a logic network onto a reversible netlist.
pub trait NetworkSynthesizer {
    /// Synthesize `network`, returning the netlist and its qubit bookkeeping.
    fn synthesize(&self, network: &LogicNetwork) -> SynthResult<(Netlist, LhrsStats)>;
}

/// Reads structural Verilog.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerilogReader;

impl NetworkReader for VerilogReader {
    fn read(&self, path: &Path) -> SynthResult<LogicNetwork> {
        let source = std::fs::read_to_string(path).map_err(|source| SynthError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = revkit_verilog::parse(&source)?;
        debug!(
            path = %path.display(),
            pis = network.num_pis(),
            pos = network.num_pos(),
            gates = network.num_gates(),
            "read verilog network"
        );
        Ok(network)
    }
}

/// Compute / copy / uncompute synthesis with one ancilla per gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BennettSynthesizer;

impl NetworkSynthesizer for BennettSynthesizer {
    fn synthesize(&self, network: &LogicNetwork) -> SynthResult<(Netlist, LhrsStats)> {
        let mut netlist = Netlist::new("lhrs");
        let inputs = netlist.add_qreg(INPUTS_REGISTER, count_u32(network.num_pis()));
        let ancillae = netlist.add_qreg(ANCILLAE_REGISTER, count_u32(network.num_gates()));
        let outputs = netlist.add_qreg(OUTPUTS_REGISTER, count_u32(network.num_pos()));

        let mut qubit_of: FxHashMap<NodeId, QubitId> = FxHashMap::default();
        qubit_of.extend(network.pis().iter().copied().zip(inputs.iter().copied()));
        let gates: Vec<(NodeId, &Node)> = network.gates().collect();
        qubit_of.extend(gates.iter().map(|(id, _)| *id).zip(ancillae.iter().copied()));

        debug!(
            pis = inputs.len(),
            gates = gates.len(),
            pos = outputs.len(),
            "bennett synthesis"
        );

        let mut emitter = Emitter {
            netlist: &mut netlist,
            qubit_of: &qubit_of,
        };
        for (id, node) in &gates {
            emitter.compute(*id, node)?;
        }
        for (output, &qubit) in network.pos().iter().zip(&outputs) {
            let operand = emitter.operand(output.signal);
            emitter.toggle_xor(&[operand], qubit)?;
        }
        for (id, node) in gates.iter().rev() {
            emitter.compute(*id, node)?;
        }

        let stats = LhrsStats {
            input_indexes: inputs.iter().map(|q| q.0).collect(),
            output_indexes: outputs.iter().map(|q| q.0).collect(),
            num_ancillae: ancillae.len(),
        };
        Ok((netlist, stats))
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// A fanin as seen by the emitter.
#[derive(Debug, Clone, Copy)]
enum Operand {
    Const(bool),
    Qubit { qubit: QubitId, complemented: bool },
}

struct Emitter<'a> {
    netlist: &'a mut Netlist,
    qubit_of: &'a FxHashMap<NodeId, QubitId>,
}

impl Emitter<'_> {
    fn operand(&self, signal: Signal) -> Operand {
        match self.qubit_of.get(&signal.node()) {
            Some(&qubit) => Operand::Qubit {
                qubit,
                complemented: signal.is_complemented(),
            },
            // Only the constant node has no qubit.
            None => Operand::Const(signal.is_complemented()),
        }
    }

    /// XOR the value of `node` into its ancilla. The block is self-inverse.
    fn compute(&mut self, id: NodeId, node: &Node) -> SynthResult<()> {
        let Some(&target) = self.qubit_of.get(&id) else {
            return Ok(());
        };
        match node {
            Node::Constant | Node::Input { .. } => {}
            Node::And(a, b) => {
                let (a, b) = (self.operand(*a), self.operand(*b));
                self.toggle_and(a, b, target)?;
            }
            Node::Xor(a, b) => {
                let (a, b) = (self.operand(*a), self.operand(*b));
                self.toggle_xor(&[a, b], target)?;
            }
            Node::Maj(a, b, c) => {
                // maj(a, b, c) = ab ⊕ ac ⊕ bc
                let (a, b, c) = (self.operand(*a), self.operand(*b), self.operand(*c));
                self.toggle_and(a, b, target)?;
                self.toggle_and(a, c, target)?;
                self.toggle_and(b, c, target)?;
            }
        }
        Ok(())
    }

    /// `target ^= a ⊕ b ⊕ …`
    fn toggle_xor(&mut self, operands: &[Operand], target: QubitId) -> SynthResult<()> {
        let mut invert = false;
        for operand in operands {
            match *operand {
                Operand::Const(value) => invert ^= value,
                Operand::Qubit {
                    qubit,
                    complemented,
                } => {
                    self.netlist.cx(qubit, target)?;
                    invert ^= complemented;
                }
            }
        }
        if invert {
            self.netlist.x(target)?;
        }
        Ok(())
    }

    /// `target ^= a ∧ b`
    fn toggle_and(&mut self, a: Operand, b: Operand, target: QubitId) -> SynthResult<()> {
        match (a, b) {
            (Operand::Const(false), _) | (_, Operand::Const(false)) => Ok(()),
            (Operand::Const(true), other) | (other, Operand::Const(true)) => {
                self.toggle_xor(&[other], target)
            }
            (
                Operand::Qubit {
                    qubit: qa,
                    complemented: ca,
                },
                Operand::Qubit {
                    qubit: qb,
                    complemented: cb,
                },
            ) if qa == qb => {
                if ca == cb {
                    self.toggle_xor(&[a], target)
                } else {
                    Ok(())
                }
            }
            (
                Operand::Qubit {
                    qubit: qa,
                    complemented: ca,
                },
                Operand::Qubit {
                    qubit: qb,
                    complemented: cb,
                },
            ) => {
                self.negate_if(qa, ca)?;
                self.negate_if(qb, cb)?;
                self.netlist.ccx(qa, qb, target)?;
                self.negate_if(qa, ca)?;
                self.negate_if(qb, cb)?;
                Ok(())
            }
        }
    }

    fn negate_if(&mut self, qubit: QubitId, negate: bool) -> SynthResult<()> {
        if negate {
            self.netlist.x(qubit)?;
        }
        Ok(())
    }
}

/// Compile `network` with the given synthesizer.
pub fn lhrs(
    network: &LogicNetwork,
    synthesizer: &impl NetworkSynthesizer,
) -> SynthResult<(Netlist, LhrsStats)> {
    synthesizer.synthesize(network)
}
