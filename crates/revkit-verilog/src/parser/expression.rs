//! Expression parsing for Verilog assignments.

use super::Parser;
use crate::ast::{BinOp, Expression};
use crate::error::{ParseError, ParseResult};
use crate::lexer::Token;

impl Parser {
    /// Parse an expression.
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_binary_expr(0)
    }

    /// Parse binary expression with precedence climbing.
    fn parse_binary_expr(&mut self, min_prec: u8) -> ParseResult<Expression> {
        let mut left = self.parse_unary_expr()?;

        while let Some(op) = self.peek_binary_op() {
            let prec = op_precedence(op);
            if prec < min_prec {
                break;
            }
            self.advance();

            let right = self.parse_binary_expr(prec + 1)?;
            left = Expression::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse unary expression.
    fn parse_unary_expr(&mut self) -> ParseResult<Expression> {
        if self.consume(&Token::Tilde) {
            let expr = self.parse_unary_expr()?;
            return Ok(Expression::Not(Box::new(expr)));
        }
        self.parse_primary_expr()
    }

    /// Parse primary expression.
    fn parse_primary_expr(&mut self) -> ParseResult<Expression> {
        let line = self.line();
        let token = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expression".into()))?;

        match token {
            Token::Identifier(name) => Ok(Expression::Identifier(name)),
            Token::IntLiteral(v) => match v {
                0 => Ok(Expression::Constant(false)),
                1 => Ok(Expression::Constant(true)),
                _ => Err(ParseError::UnsupportedConstant(v.to_string())),
            },
            Token::SizedLiteral(text) => parse_sized_literal(&text),
            Token::LParen => {
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            other => Err(ParseError::UnexpectedToken {
                line,
                expected: "expression".into(),
                found: other.to_string(),
            }),
        }
    }

    /// Peek at binary operator.
    fn peek_binary_op(&self) -> Option<BinOp> {
        match self.peek()? {
            Token::Ampersand => Some(BinOp::And),
            Token::Caret => Some(BinOp::Xor),
            Token::Pipe => Some(BinOp::Or),
            _ => None,
        }
    }
}

/// Verilog precedence: `&` binds tighter than `^`, which binds tighter than `|`.
fn op_precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Or => 1,
        BinOp::Xor => 2,
        BinOp::And => 3,
    }
}

/// Accept `1'b0` / `1'b1` (and wider literals whose value is 0 or 1 in a
/// single bit).
fn parse_sized_literal(text: &str) -> ParseResult<Expression> {
    let unsupported = || ParseError::UnsupportedConstant(text.to_string());
    let (width, digits) = text.split_once('\'').ok_or_else(unsupported)?;
    if width != "1" {
        return Err(unsupported());
    }
    match &digits[1..] {
        "0" => Ok(Expression::Constant(false)),
        "1" => Ok(Expression::Constant(true)),
        _ => Err(unsupported()),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinOp, Expression};
    use crate::parser::parse_module;

    fn rhs(expr: &str) -> Expression {
        let source = format!("module m(a, b, c, y); input a, b, c; output y; assign y = {expr}; endmodule");
        parse_module(&source).unwrap().assigns.remove(0).expr
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let expr = rhs("a | b & c");
        match expr {
            Expression::BinOp { op: BinOp::Or, right, .. } => {
                assert!(matches!(*right, Expression::BinOp { op: BinOp::And, .. }));
            }
            other => panic!("unexpected expression {other:?}"),
        }
    }

    #[test]
    fn test_xor_between_and_and_or() {
        let expr = rhs("a ^ b & c | a");
        match expr {
            Expression::BinOp { op: BinOp::Or, left, .. } => {
                assert!(matches!(*left, Expression::BinOp { op: BinOp::Xor, .. }));
            }
            other => panic!("unexpected expression {other:?}"),
        }
    }

    #[test]
    fn test_negation_and_parentheses() {
        let expr = rhs("~(a & b)");
        assert!(matches!(expr, Expression::Not(_)));
        assert_eq!(expr.identifiers(), vec!["a", "b"]);
    }

    #[test]
    fn test_constants() {
        assert!(matches!(rhs("1'b0"), Expression::Constant(false)));
        assert!(matches!(rhs("1"), Expression::Constant(true)));
    }

    #[test]
    fn test_wide_constant_rejected() {
        let source = "module m(y); output y; assign y = 2'b10; endmodule";
        assert!(parse_module(source).is_err());
    }
}
