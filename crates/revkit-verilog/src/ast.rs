//! Abstract Syntax Tree for structural Verilog.

use serde::{Deserialize, Serialize};

/// A single Verilog module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// Port names from the module header.
    pub ports: Vec<String>,
    /// Declared inputs, in declaration order.
    pub inputs: Vec<String>,
    /// Declared outputs, in declaration order.
    pub outputs: Vec<String>,
    /// Declared internal wires.
    pub wires: Vec<String>,
    /// Continuous assignments, in source order.
    pub assigns: Vec<Assign>,
}

/// `assign target = expr;`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assign {
    /// Assigned signal.
    pub target: String,
    /// Right-hand side.
    pub expr: Expression,
    /// Source line of the statement.
    pub line: usize,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    And,
    Or,
    Xor,
}

/// A Boolean expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// Signal reference.
    Identifier(String),
    /// Constant `0` or `1`.
    Constant(bool),
    /// Bitwise negation `~e`.
    Not(Box<Expression>),
    /// Binary operation.
    BinOp {
        left: Box<Expression>,
        op: BinOp,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Names referenced by the expression, in evaluation order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_identifiers(&mut names);
        names
    }

    fn collect_identifiers<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expression::Identifier(name) => names.push(name),
            Expression::Constant(_) => {}
            Expression::Not(inner) => inner.collect_identifiers(names),
            Expression::BinOp { left, right, .. } => {
                left.collect_identifiers(names);
                right.collect_identifiers(names);
            }
        }
    }
}
