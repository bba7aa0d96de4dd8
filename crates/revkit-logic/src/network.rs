//! Combinational logic networks with complemented edges.
//!
//! A [`LogicNetwork`] holds a constant-zero node, primary inputs and
//! two-input AND / XOR and three-input majority gates. Edges are [`Signal`]s
//! that may be complemented, so AIGs, XAGs and MIGs all fit the same
//! structure. Gates can only be created from existing signals, which keeps
//! the node list in topological order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Not;

use crate::error::{LogicError, LogicResult};
use crate::truth_table::TruthTable;

/// Index of a node in a [`LogicNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A possibly complemented reference to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signal {
    node: NodeId,
    complemented: bool,
}

impl Signal {
    /// Create a signal.
    pub fn new(node: NodeId, complemented: bool) -> Self {
        Self { node, complemented }
    }

    /// The referenced node.
    #[inline]
    pub fn node(self) -> NodeId {
        self.node
    }

    /// Whether the signal inverts its node.
    #[inline]
    pub fn is_complemented(self) -> bool {
        self.complemented
    }
}

impl Not for Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        Signal {
            node: self.node,
            complemented: !self.complemented,
        }
    }
}

/// A node of the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// The constant-zero node (always node 0).
    Constant,
    /// Primary input number `index`.
    Input {
        /// Position among the primary inputs.
        index: u32,
    },
    /// Two-input AND.
    And(Signal, Signal),
    /// Two-input XOR.
    Xor(Signal, Signal),
    /// Three-input majority.
    Maj(Signal, Signal, Signal),
}

impl Node {
    /// Whether the node is a logic gate.
    pub fn is_gate(&self) -> bool {
        matches!(self, Node::And(..) | Node::Xor(..) | Node::Maj(..))
    }

    /// Fanin signals of a gate, empty for constants and inputs.
    pub fn fanins(&self) -> Vec<Signal> {
        match self {
            Node::Constant | Node::Input { .. } => vec![],
            Node::And(a, b) | Node::Xor(a, b) => vec![*a, *b],
            Node::Maj(a, b, c) => vec![*a, *b, *c],
        }
    }
}

/// A named primary output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Output name.
    pub name: String,
    /// Driving signal.
    pub signal: Signal,
}

/// A combinational logic network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicNetwork {
    nodes: Vec<Node>,
    inputs: Vec<NodeId>,
    input_names: Vec<String>,
    outputs: Vec<Output>,
    #[serde(skip)]
    strash: FxHashMap<Node, NodeId>,
}

impl Default for LogicNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicNetwork {
    /// Create a network containing only the constant node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Constant],
            inputs: vec![],
            input_names: vec![],
            outputs: vec![],
            strash: FxHashMap::default(),
        }
    }

    /// The constant signal of the given value.
    pub fn get_constant(&self, value: bool) -> Signal {
        Signal::new(NodeId(0), value)
    }

    /// Create a primary input.
    pub fn create_pi(&mut self, name: impl Into<String>) -> Signal {
        let index = self.inputs.len() as u32;
        let id = self.push(Node::Input { index });
        self.inputs.push(id);
        self.input_names.push(name.into());
        Signal::new(id, false)
    }

    /// Register a primary output.
    pub fn create_po(&mut self, signal: Signal, name: impl Into<String>) -> LogicResult<()> {
        self.check(signal)?;
        self.outputs.push(Output {
            name: name.into(),
            signal,
        });
        Ok(())
    }

    /// Create `a ∧ b`.
    pub fn create_and(&mut self, a: Signal, b: Signal) -> LogicResult<Signal> {
        self.check(a)?;
        self.check(b)?;
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if a == b {
            return Ok(a);
        }
        if a.node() == b.node() {
            return Ok(self.get_constant(false));
        }
        if a.node() == NodeId(0) {
            return Ok(if a.is_complemented() { b } else { a });
        }
        Ok(self.strashed(Node::And(a, b)))
    }

    /// Create `a ∨ b` as `¬(¬a ∧ ¬b)`.
    pub fn create_or(&mut self, a: Signal, b: Signal) -> LogicResult<Signal> {
        Ok(!self.create_and(!a, !b)?)
    }

    /// Create `a ⊕ b`. Complements are moved to the output.
    pub fn create_xor(&mut self, a: Signal, b: Signal) -> LogicResult<Signal> {
        self.check(a)?;
        self.check(b)?;
        let invert = a.is_complemented() != b.is_complemented();
        let a = Signal::new(a.node(), false);
        let b = Signal::new(b.node(), false);
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let result = if a == b {
            self.get_constant(false)
        } else if a.node() == NodeId(0) {
            b
        } else {
            self.strashed(Node::Xor(a, b))
        };
        Ok(if invert { !result } else { result })
    }

    /// Create the majority of three signals.
    pub fn create_maj(&mut self, a: Signal, b: Signal, c: Signal) -> LogicResult<Signal> {
        self.check(a)?;
        self.check(b)?;
        self.check(c)?;
        let mut fanins = [a, b, c];
        fanins.sort();
        let [a, b, c] = fanins;
        if a == b || a == !b {
            return Ok(if a == b { a } else { c });
        }
        if b == c || b == !c {
            return Ok(if b == c { b } else { a });
        }
        if a.node() == c.node() {
            return Ok(if a == c { a } else { b });
        }
        Ok(self.strashed(Node::Maj(a, b, c)))
    }

    fn check(&self, signal: Signal) -> LogicResult<()> {
        if signal.node().index() < self.nodes.len() {
            Ok(())
        } else {
            Err(LogicError::InvalidSignal {
                node: signal.node().0,
                size: self.nodes.len(),
            })
        }
    }

    fn strashed(&mut self, node: Node) -> Signal {
        if let Some(&id) = self.strash.get(&node) {
            return Signal::new(id, false);
        }
        let id = self.push(node.clone());
        self.strash.insert(node, id);
        Signal::new(id, false)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of nodes, including the constant and the inputs.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of primary inputs.
    pub fn num_pis(&self) -> usize {
        self.inputs.len()
    }

    /// Number of primary outputs.
    pub fn num_pos(&self) -> usize {
        self.outputs.len()
    }

    /// Number of gate nodes.
    pub fn num_gates(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_gate()).count()
    }

    /// A node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// All nodes in topological order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Gate nodes in topological order.
    pub fn gates(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes().filter(|(_, n)| n.is_gate())
    }

    /// Primary input nodes in declaration order.
    pub fn pis(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Primary input names in declaration order.
    pub fn pi_names(&self) -> &[String] {
        &self.input_names
    }

    /// Primary outputs in declaration order.
    pub fn pos(&self) -> &[Output] {
        &self.outputs
    }

    /// Simulate the network, returning one truth table per primary output
    /// over the primary inputs.
    pub fn simulate(&self) -> LogicResult<Vec<TruthTable>> {
        let num_vars = self.inputs.len() as u32;
        let mut tables: Vec<TruthTable> = Vec::with_capacity(self.nodes.len());
        let signal_tt = |tables: &[TruthTable], s: Signal| {
            let tt = &tables[s.node().index()];
            if s.is_complemented() { !tt } else { tt.clone() }
        };
        for node in &self.nodes {
            let tt = match node {
                Node::Constant => TruthTable::new(num_vars)?,
                Node::Input { index } => TruthTable::nth_var(num_vars, *index)?,
                Node::And(a, b) => &signal_tt(&tables, *a) & &signal_tt(&tables, *b),
                Node::Xor(a, b) => &signal_tt(&tables, *a) ^ &signal_tt(&tables, *b),
                Node::Maj(a, b, c) => {
                    let (a, b, c) = (
                        signal_tt(&tables, *a),
                        signal_tt(&tables, *b),
                        signal_tt(&tables, *c),
                    );
                    &(&(&a & &b) | &(&a & &c)) | &(&b & &c)
                }
            };
            tables.push(tt);
        }
        Ok(self
            .outputs
            .iter()
            .map(|o| signal_tt(&tables, o.signal))
            .collect())
    }
}
