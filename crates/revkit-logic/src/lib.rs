//! Boolean function model for revkit.
//!
//! Every synthesizer in `revkit-synth` consumes one of the representations
//! defined here:
//!
//! - [`TruthTable`]: a Boolean function of fixed arity as a bit-vector
//! - [`ParityTerms`]: an ordered list of (variable subset, angle) pairs
//! - [`Permutation`]: a validated bijection on `n`-bit values
//! - [`LogicNetwork`]: a combinational AND/XOR/MAJ network with complemented edges
//!
//! # Example
//!
//! ```rust
//! use revkit_logic::{Permutation, TruthTable};
//!
//! let and = TruthTable::from_binary("1000").unwrap();
//! assert_eq!(and.num_vars(), 2);
//!
//! let swap = Permutation::new(vec![0, 2, 1, 3]).unwrap();
//! assert_eq!(swap.apply(1), 2);
//! assert!(Permutation::new(vec![0, 0, 1, 2]).is_err());
//! ```

pub mod error;
pub mod network;
pub mod parity;
pub mod permutation;
pub mod truth_table;

pub use error::{LogicError, LogicResult};
pub use network::{LogicNetwork, Node, NodeId, Output, Signal};
pub use parity::{ParityTerm, ParityTerms};
pub use permutation::Permutation;
pub use truth_table::{MAX_VARS, TruthTable};
