//! Parser for structural Verilog.

mod expression;
mod lowering;

pub(crate) use lowering::lower_to_network;

use revkit_logic::LogicNetwork;

use crate::ast::{Assign, Module};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a Verilog source string into a logic network.
pub fn parse(source: &str) -> ParseResult<LogicNetwork> {
    let module = parse_module(source)?;
    lower_to_network(&module)
}

/// Parse a Verilog source string into a module AST.
pub fn parse_module(source: &str) -> ParseResult<Module> {
    let mut parser = Parser::new(source)?;
    parser.parse_module()
}

/// Parser state.
pub(super) struct Parser {
    pub(super) tokens: Vec<SpannedToken>,
    pub(super) pos: usize,
}

impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((line, message)) => return Err(ParseError::LexerError { line, message }),
            }
        }
        Ok(Self { tokens, pos: 0 })
    }

    /// Line of the current token (or the last one at end of input).
    pub(super) fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    /// Peek at the current token.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance and return the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.token.clone();
        self.pos += 1;
        Some(token)
    }

    /// Expect a specific token.
    #[allow(clippy::needless_pass_by_value)]
    pub(super) fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let line = self.line();
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(&expected) {
            return Err(ParseError::UnexpectedToken {
                line,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Check if current token matches.
    pub(super) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    /// Consume token if it matches.
    pub(super) fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect an identifier and return its name.
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        let line = self.line();
        match self.advance() {
            Some(Token::Identifier(name)) => Ok(name),
            Some(other) => Err(ParseError::UnexpectedToken {
                line,
                expected: "identifier".into(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("expected identifier".into())),
        }
    }

    /// Parse a comma-separated identifier list.
    fn parse_identifier_list(&mut self) -> ParseResult<Vec<String>> {
        let mut names = vec![self.expect_identifier()?];
        while self.consume(&Token::Comma) {
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    /// Parse `module name (ports); items endmodule`.
    fn parse_module(&mut self) -> ParseResult<Module> {
        self.expect(Token::Module)?;
        let name = self.expect_identifier()?;

        let mut ports = vec![];
        if self.consume(&Token::LParen) {
            if !self.check(&Token::RParen) {
                ports = self.parse_identifier_list()?;
            }
            self.expect(Token::RParen)?;
        }
        self.expect(Token::Semicolon)?;

        let mut module = Module {
            name,
            ports,
            inputs: vec![],
            outputs: vec![],
            wires: vec![],
            assigns: vec![],
        };

        loop {
            let line = self.line();
            match self.advance() {
                Some(Token::EndModule) => break,
                Some(Token::Input) => {
                    let names = self.parse_identifier_list()?;
                    self.expect(Token::Semicolon)?;
                    module.inputs.extend(names);
                }
                Some(Token::Output) => {
                    let names = self.parse_identifier_list()?;
                    self.expect(Token::Semicolon)?;
                    module.outputs.extend(names);
                }
                Some(Token::Wire) => {
                    let names = self.parse_identifier_list()?;
                    self.expect(Token::Semicolon)?;
                    module.wires.extend(names);
                }
                Some(Token::Assign) => {
                    let target = self.expect_identifier()?;
                    self.expect(Token::Eq)?;
                    let expr = self.parse_expression()?;
                    self.expect(Token::Semicolon)?;
                    module.assigns.push(Assign { target, expr, line });
                }
                Some(other) => {
                    return Err(ParseError::UnexpectedToken {
                        line,
                        expected: "module item".into(),
                        found: other.to_string(),
                    });
                }
                None => return Err(ParseError::UnexpectedEof("expected endmodule".into())),
            }
        }

        Ok(module)
    }
}
