//! Truth tables for Boolean functions of a fixed arity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::{LogicError, LogicResult};

/// Largest supported arity.
pub const MAX_VARS: u32 = 20;

/// A Boolean function of `num_vars` variables stored as `2^num_vars` bits.
///
/// Bit `x` holds `f(x)`, where bit `i` of the index `x` is the value of
/// variable `i`. Tables are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TruthTable {
    num_vars: u32,
    words: Vec<u64>,
}

impl TruthTable {
    /// The constant-zero function of `num_vars` variables.
    pub fn new(num_vars: u32) -> LogicResult<Self> {
        if num_vars > MAX_VARS {
            return Err(LogicError::TooManyVariables {
                got: num_vars,
                max: MAX_VARS,
            });
        }
        let num_words = (1usize << num_vars).div_ceil(64);
        Ok(Self {
            num_vars,
            words: vec![0; num_words],
        })
    }

    /// Build a table by evaluating `f` on every assignment.
    pub fn from_fn(num_vars: u32, f: impl Fn(u64) -> bool) -> LogicResult<Self> {
        let mut tt = Self::new(num_vars)?;
        for x in 0..tt.num_bits() {
            if f(x) {
                tt.set_bit(x);
            }
        }
        Ok(tt)
    }

    /// Build a table from exactly `2^num_vars` bits, lowest assignment first.
    pub fn from_bits(num_vars: u32, bits: impl IntoIterator<Item = bool>) -> LogicResult<Self> {
        let mut tt = Self::new(num_vars)?;
        let mut count = 0u64;
        for bit in bits {
            if count < tt.num_bits() && bit {
                tt.set_bit(count);
            }
            count += 1;
        }
        if count != tt.num_bits() {
            return Err(LogicError::LengthMismatch {
                expected: tt.num_bits() as usize,
                got: count as usize,
            });
        }
        Ok(tt)
    }

    /// The projection function `f(x) = x_var`.
    pub fn nth_var(num_vars: u32, var: u32) -> LogicResult<Self> {
        if var >= num_vars {
            return Err(LogicError::VariableOutOfRange { var, num_vars });
        }
        Self::from_fn(num_vars, |x| (x >> var) & 1 == 1)
    }

    /// Parse a binary string, most significant assignment first.
    ///
    /// `"1000"` is the two-variable AND: only assignment `11` maps to one.
    pub fn from_binary(bits: &str) -> LogicResult<Self> {
        let len = bits.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(LogicError::InvalidBitString(bits.to_string()));
        }
        let num_vars = len.trailing_zeros();
        let values = bits
            .chars()
            .rev()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(LogicError::InvalidBitString(bits.to_string())),
            })
            .collect::<LogicResult<Vec<_>>>()?;
        Self::from_bits(num_vars, values)
    }

    /// Parse a hexadecimal string, most significant digit first.
    ///
    /// Tables with fewer than two variables use a single digit whose unused
    /// high bits must be zero.
    pub fn from_hex(num_vars: u32, digits: &str) -> LogicResult<Self> {
        let mut tt = Self::new(num_vars)?;
        let expected = (tt.num_bits() as usize).div_ceil(4);
        if digits.len() != expected {
            return Err(LogicError::InvalidHexString(digits.to_string()));
        }
        for (pos, c) in digits.chars().rev().enumerate() {
            let value = c
                .to_digit(16)
                .ok_or_else(|| LogicError::InvalidHexString(digits.to_string()))?;
            for bit in 0..4u64 {
                if (value >> bit) & 1 == 0 {
                    continue;
                }
                let index = pos as u64 * 4 + bit;
                if index >= tt.num_bits() {
                    return Err(LogicError::InvalidHexString(digits.to_string()));
                }
                tt.set_bit(index);
            }
        }
        Ok(tt)
    }

    fn set_bit(&mut self, index: u64) {
        self.words[(index / 64) as usize] |= 1 << (index % 64);
    }

    fn mask_unused(&mut self) {
        if self.num_vars < 6 {
            self.words[0] &= (1u64 << self.num_bits()) - 1;
        }
    }

    /// Number of variables.
    #[inline]
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Number of bits, `2^num_vars`.
    #[inline]
    pub fn num_bits(&self) -> u64 {
        1u64 << self.num_vars
    }

    /// Value of the function on assignment `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_bits()`.
    #[inline]
    pub fn get_bit(&self, index: u64) -> bool {
        assert!(index < self.num_bits(), "assignment {index} out of range");
        (self.words[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    /// Iterate over all function values, lowest assignment first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_bits()).map(|x| self.get_bit(x))
    }

    /// Number of satisfying assignments.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Whether the function is constant zero.
    pub fn is_const0(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Binary representation, most significant assignment first.
    pub fn to_binary(&self) -> String {
        (0..self.num_bits())
            .rev()
            .map(|x| if self.get_bit(x) { '1' } else { '0' })
            .collect()
    }

    fn zip_words(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        assert_eq!(
            self.num_vars, other.num_vars,
            "truth tables must have the same number of variables"
        );
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Self {
            num_vars: self.num_vars,
            words,
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary())
    }
}

impl BitAnd for &TruthTable {
    type Output = TruthTable;

    fn bitand(self, rhs: Self) -> TruthTable {
        self.zip_words(rhs, |a, b| a & b)
    }
}

impl BitOr for &TruthTable {
    type Output = TruthTable;

    fn bitor(self, rhs: Self) -> TruthTable {
        self.zip_words(rhs, |a, b| a | b)
    }
}

impl BitXor for &TruthTable {
    type Output = TruthTable;

    fn bitxor(self, rhs: Self) -> TruthTable {
        self.zip_words(rhs, |a, b| a ^ b)
    }
}

impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> TruthTable {
        let mut tt = TruthTable {
            num_vars: self.num_vars,
            words: self.words.iter().map(|w| !w).collect(),
        };
        tt.mask_unused();
        tt
    }
}
