//! Parity terms: variable subsets paired with rotation angles.

use rustc_hash::FxHashMap;

use crate::error::{LogicError, LogicResult};

/// Largest number of variables a parity mask can address.
pub const MAX_PARITY_VARS: u32 = u64::BITS;

/// A single parity term: bit `i` of `mask` selects variable `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParityTerm {
    /// Variables in the parity.
    pub mask: u64,
    /// Rotation angle in radians.
    pub angle: f64,
}

/// An ordered list of parity terms over a common number of variables.
///
/// Terms keep their first-insertion order. Adding a mask that is already
/// present adds its angle to the existing term.
#[derive(Debug, Clone, Default)]
pub struct ParityTerms {
    num_vars: Option<u32>,
    terms: Vec<ParityTerm>,
    index: FxHashMap<u64, usize>,
}

impl ParityTerms {
    /// Create an empty list whose width is fixed by the first term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list over `num_vars` variables.
    pub fn with_num_vars(num_vars: u32) -> LogicResult<Self> {
        if num_vars > MAX_PARITY_VARS {
            return Err(LogicError::TooManyVariables {
                got: num_vars,
                max: MAX_PARITY_VARS,
            });
        }
        Ok(Self {
            num_vars: Some(num_vars),
            ..Self::default()
        })
    }

    /// Build a list from `(bit-string, angle)` pairs.
    pub fn from_bitstrings<'a>(
        terms: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> LogicResult<Self> {
        let mut parities = Self::new();
        for (term, angle) in terms {
            parities.add_bitstring(term, angle)?;
        }
        Ok(parities)
    }

    /// Add a term given as a bit-string; character `i` set to `1` selects
    /// variable `i`.
    pub fn add_bitstring(&mut self, term: &str, angle: f64) -> LogicResult<()> {
        let width = u32::try_from(term.len()).unwrap_or(u32::MAX);
        if width == 0 {
            return Err(LogicError::InvalidBitString(term.to_string()));
        }
        if width > MAX_PARITY_VARS {
            return Err(LogicError::TooManyVariables {
                got: width,
                max: MAX_PARITY_VARS,
            });
        }
        let mut mask = 0u64;
        for (i, c) in term.chars().enumerate() {
            match c {
                '1' => mask |= 1 << i,
                '0' => {}
                _ => return Err(LogicError::InvalidBitString(term.to_string())),
            }
        }
        match self.num_vars {
            None => self.num_vars = Some(width),
            Some(expected) if expected != width => {
                return Err(LogicError::InconsistentTermWidth {
                    term: term.to_string(),
                    expected,
                    got: width,
                });
            }
            Some(_) => {}
        }
        self.insert(mask, angle);
        Ok(())
    }

    /// Add a term given as a bitmask.
    ///
    /// If no width is fixed yet, the width becomes the bit length of `mask`.
    pub fn add_term(&mut self, mask: u64, angle: f64) -> LogicResult<()> {
        let width = (u64::BITS - mask.leading_zeros()).max(1);
        match self.num_vars {
            None => self.num_vars = Some(width),
            Some(expected) if width > expected => {
                return Err(LogicError::InconsistentTermWidth {
                    term: format!("{mask:b}"),
                    expected,
                    got: width,
                });
            }
            Some(_) => {}
        }
        self.insert(mask, angle);
        Ok(())
    }

    fn insert(&mut self, mask: u64, angle: f64) {
        if let Some(&pos) = self.index.get(&mask) {
            self.terms[pos].angle += angle;
        } else {
            self.index.insert(mask, self.terms.len());
            self.terms.push(ParityTerm { mask, angle });
        }
    }

    /// Number of variables, zero while no term has been added.
    pub fn num_vars(&self) -> u32 {
        self.num_vars.unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the list has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms in insertion order.
    pub fn terms(&self) -> &[ParityTerm] {
        &self.terms
    }

    /// Accumulated angle of a mask, if present.
    pub fn angle(&self, mask: u64) -> Option<f64> {
        self.index.get(&mask).map(|&pos| self.terms[pos].angle)
    }

    /// Phase accumulated on basis state `x`: the sum of the angles of all
    /// terms whose parity is odd on `x`.
    pub fn phase_of(&self, x: u64) -> f64 {
        self.terms
            .iter()
            .filter(|t| (t.mask & x).count_ones() % 2 == 1)
            .map(|t| t.angle)
            .sum()
    }
}
