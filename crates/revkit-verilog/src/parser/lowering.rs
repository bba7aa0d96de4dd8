//! AST-to-network lowering for structural Verilog.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use revkit_logic::{LogicNetwork, Signal};
use rustc_hash::FxHashMap;

use crate::ast::{BinOp, Expression, Module};
use crate::error::{ParseError, ParseResult};

/// Role of a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declared {
    Input,
    Output,
    Wire,
}

/// Lower a module AST to a logic network.
///
/// Primary inputs and outputs keep their declaration order. Assignments may
/// appear in any order; they are evaluated along a dependency graph, and a
/// cycle in that graph is reported as a combinational loop.
pub(crate) fn lower_to_network(module: &Module) -> ParseResult<LogicNetwork> {
    let mut lowerer = Lowerer::new();
    lowerer.lower(module)
}

struct Lowerer {
    declared: FxHashMap<String, Declared>,
    signals: FxHashMap<String, Signal>,
    ntk: LogicNetwork,
}

impl Lowerer {
    fn new() -> Self {
        Self {
            declared: FxHashMap::default(),
            signals: FxHashMap::default(),
            ntk: LogicNetwork::new(),
        }
    }

    fn lower(&mut self, module: &Module) -> ParseResult<LogicNetwork> {
        self.declare(&module.inputs, Declared::Input)?;
        self.declare(&module.outputs, Declared::Output)?;
        self.declare(&module.wires, Declared::Wire)?;

        for name in &module.inputs {
            let pi = self.ntk.create_pi(name.as_str());
            self.signals.insert(name.clone(), pi);
        }

        // assign index by driven name
        let mut drivers: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, assign) in module.assigns.iter().enumerate() {
            match self.declared.get(&assign.target) {
                None => return Err(ParseError::UndefinedIdentifier(assign.target.clone())),
                Some(Declared::Input) => return Err(ParseError::AssignToInput(assign.target.clone())),
                Some(_) => {}
            }
            if drivers.insert(assign.target.as_str(), i).is_some() {
                return Err(ParseError::DuplicateDeclaration(assign.target.clone()));
            }
        }

        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(module.assigns.len(), 0);
        let nodes: Vec<NodeIndex> = (0..module.assigns.len())
            .map(|i| graph.add_node(i))
            .collect();

        for (i, assign) in module.assigns.iter().enumerate() {
            for name in assign.expr.identifiers() {
                match self.declared.get(name) {
                    None => return Err(ParseError::UndefinedIdentifier(name.to_string())),
                    Some(Declared::Input) => {}
                    Some(_) => {
                        let driver = drivers
                            .get(name)
                            .ok_or_else(|| ParseError::UndrivenSignal(name.to_string()))?;
                        graph.add_edge(nodes[*driver], nodes[i], ());
                    }
                }
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            let assign = &module.assigns[graph[cycle.node_id()]];
            ParseError::CombinationalLoop(assign.target.clone())
        })?;

        for node in order {
            let assign = &module.assigns[graph[node]];
            let signal = self.eval(&assign.expr)?;
            self.signals.insert(assign.target.clone(), signal);
        }

        for name in &module.outputs {
            let signal = *self
                .signals
                .get(name)
                .ok_or_else(|| ParseError::UndrivenSignal(name.clone()))?;
            self.ntk.create_po(signal, name.as_str())?;
        }

        Ok(std::mem::take(&mut self.ntk))
    }

    fn declare(&mut self, names: &[String], kind: Declared) -> ParseResult<()> {
        for name in names {
            if self.declared.insert(name.clone(), kind).is_some() {
                return Err(ParseError::DuplicateDeclaration(name.clone()));
            }
        }
        Ok(())
    }

    fn eval(&mut self, expr: &Expression) -> ParseResult<Signal> {
        match expr {
            Expression::Identifier(name) => self
                .signals
                .get(name)
                .copied()
                .ok_or_else(|| ParseError::UndefinedIdentifier(name.clone())),
            Expression::Constant(value) => Ok(self.ntk.get_constant(*value)),
            Expression::Not(inner) => Ok(!self.eval(inner)?),
            Expression::BinOp { left, op, right } => {
                let a = self.eval(left)?;
                let b = self.eval(right)?;
                let signal = match op {
                    BinOp::And => self.ntk.create_and(a, b)?,
                    BinOp::Or => self.ntk.create_or(a, b)?,
                    BinOp::Xor => self.ntk.create_xor(a, b)?,
                };
                Ok(signal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::parser::parse;

    #[test]
    fn test_out_of_order_assigns() {
        let ntk = parse(
            "module m(a, b, c, y);
               input a, b, c;
               output y;
               wire t;
               assign y = t | c;
               assign t = a & b;
             endmodule",
        )
        .unwrap();

        assert_eq!(ntk.num_pis(), 3);
        assert_eq!(ntk.num_pos(), 1);
        let tts = ntk.simulate().unwrap();
        // (a & b) | c over (a, b, c), MSB first
        assert_eq!(tts[0].to_binary(), "11111000");
    }

    #[test]
    fn test_combinational_loop() {
        let err = parse(
            "module m(a, y);
               input a;
               output y;
               wire p, q;
               assign p = q & a;
               assign q = p;
               assign y = p;
             endmodule",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::CombinationalLoop(_)));
    }

    #[test]
    fn test_undriven_output() {
        let err = parse("module m(a, y); input a; output y; endmodule").unwrap_err();
        assert!(matches!(err, ParseError::UndrivenSignal(ref s) if s == "y"));
    }

    #[test]
    fn test_undefined_identifier() {
        let err = parse("module m(a, y); input a; output y; assign y = a & z; endmodule").unwrap_err();
        assert!(matches!(err, ParseError::UndefinedIdentifier(ref s) if s == "z"));
    }

    #[test]
    fn test_assign_to_input() {
        let err = parse("module m(a, y); input a; output y; assign a = 1; assign y = a; endmodule")
            .unwrap_err();
        assert!(matches!(err, ParseError::AssignToInput(_)));
    }

    #[test]
    fn test_double_assignment() {
        let err = parse("module m(a, y); input a; output y; assign y = a; assign y = ~a; endmodule")
            .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateDeclaration(_)));
    }

    #[test]
    fn test_constant_outputs() {
        let ntk = parse(
            "module m(a, zero, one);
               input a;
               output zero, one;
               assign zero = 1'b0;
               assign one = a | ~a;
             endmodule",
        )
        .unwrap();
        let tts = ntk.simulate().unwrap();
        assert!(tts[0].is_const0());
        assert_eq!(tts[1].count_ones(), 2);
        assert_eq!(ntk.num_gates(), 0);
    }
}
