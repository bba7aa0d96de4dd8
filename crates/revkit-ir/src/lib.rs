//! revkit Netlist Intermediate Representation
//!
//! This crate provides the data structures produced by every revkit
//! synthesizer: an append-only [`Netlist`] of gates over a register of
//! qubits.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] arena indices, [`Qubit`] records with optional
//!   register membership
//! - **Gates**: [`StandardGate`] operations (X, H, phase) applied to one target
//!   under a set of controls, bundled as [`Gate`]
//! - **Netlist**: [`Netlist`] builder that validates every operand on insertion
//!
//! # Example: a Toffoli with a phase kick
//!
//! ```rust
//! use revkit_ir::{Netlist, QubitId};
//! use std::f64::consts::PI;
//!
//! let mut netlist = Netlist::with_qubits("example", 3);
//! netlist.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
//! netlist.p(PI / 4.0, QubitId(2)).unwrap();
//!
//! assert_eq!(netlist.num_qubits(), 3);
//! assert_eq!(netlist.num_gates(), 2);
//! ```
//!
//! # Gate Names
//!
//! | Gate | Controls | Description |
//! |------|----------|-------------|
//! | `x`, `cx`, `ccx`, `mcx` | 0, 1, 2, k | (Multi-)controlled NOT |
//! | `h` | 0 | Hadamard |
//! | `p`, `cp`, `ccp`, `mcp` | 0, 1, 2, k | (Multi-)controlled phase `diag(1, e^{iθ})` |

pub mod error;
pub mod gate;
pub mod netlist;
pub mod qubit;

pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use netlist::Netlist;
pub use qubit::{Qubit, QubitId};
