//! Structural Verilog reader for revkit.
//!
//! Reads a single combinational module built from continuous assignments
//! and lowers it to a [`revkit_logic::LogicNetwork`].
//!
//! # Supported Subset
//!
//! | Feature | Status | Example |
//! |---------|--------|---------|
//! | Module header | ✅ | `module top(a, b, y);` |
//! | Scalar inputs / outputs / wires | ✅ | `input a, b;` |
//! | Continuous assignment | ✅ | `assign y = a & b;` |
//! | Operators | ✅ | `~`, `&`, `^`, `\|`, parentheses |
//! | Constants | ✅ | `1'b0`, `1'b1`, `0`, `1` |
//! | Comments | ✅ | `// line`, `/* block */` |
//! | Buses / vectors | ❌ | `input [3:0] a;` |
//! | Always blocks / registers | ❌ | |
//!
//! # Example
//!
//! ```rust
//! use revkit_verilog::parse;
//!
//! let ntk = parse(r#"
//!     module maj(a, b, c, y);
//!       input a, b, c;
//!       output y;
//!       assign y = (a & b) | (a & c) | (b & c);
//!     endmodule
//! "#).unwrap();
//!
//! assert_eq!(ntk.num_pis(), 3);
//! assert_eq!(ntk.num_pos(), 1);
//! assert_eq!(ntk.simulate().unwrap()[0].to_binary(), "11101000");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_module};

/// Re-export AST types for advanced usage.
pub mod syntax {
    pub use crate::ast::*;
}
