//! CLI command implementations.

pub mod common;
pub mod diagonal;
pub mod lhrs;
pub mod oracle;
pub mod parity;
pub mod permutation;
pub mod version;
