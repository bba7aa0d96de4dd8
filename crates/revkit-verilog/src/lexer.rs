//! Lexer for structural Verilog.

use logos::Logos;

/// Tokens of the structural Verilog subset.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
pub enum Token {
    // Keywords
    #[token("module")]
    Module,

    #[token("endmodule")]
    EndModule,

    #[token("input")]
    Input,

    #[token("output")]
    Output,

    #[token("wire")]
    Wire,

    #[token("assign")]
    Assign,

    // Literals
    #[regex(r"[0-9]+'[bB][01]+", |lex| lex.slice().to_string())]
    SizedLiteral(String),

    #[regex("[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Operators
    #[token("~")]
    Tilde,

    #[token("&")]
    Ampersand,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("=")]
    Eq,

    // Delimiters
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Module => write!(f, "module"),
            Token::EndModule => write!(f, "endmodule"),
            Token::Input => write!(f, "input"),
            Token::Output => write!(f, "output"),
            Token::Wire => write!(f, "wire"),
            Token::Assign => write!(f, "assign"),
            Token::SizedLiteral(s) | Token::Identifier(s) => write!(f, "{s}"),
            Token::IntLiteral(v) => write!(f, "{v}"),
            Token::Tilde => write!(f, "~"),
            Token::Ampersand => write!(f, "&"),
            Token::Pipe => write!(f, "|"),
            Token::Caret => write!(f, "^"),
            Token::Eq => write!(f, "="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// A token with its source position.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub line: usize,
}

/// Tokenize a Verilog source string.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken, (usize, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count();
        scanned = span.start;

        if let Ok(token) = result {
            tokens.push(Ok(SpannedToken { token, line }));
        } else {
            let slice = &source[span];
            tokens.push(Err((line, format!("Invalid token: '{slice}'"))));
        }
    }

    tokens
}
