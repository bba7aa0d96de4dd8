//! Permutations of `{0, ..., 2^n - 1}`, i.e. reversible functions on `n` bits.

use serde::Serialize;

use crate::error::{LogicError, LogicResult};
use crate::truth_table::MAX_VARS;

/// A validated bijection on `n`-bit values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Permutation {
    num_vars: u32,
    values: Vec<u32>,
}

impl Permutation {
    /// Validate `values` as a permutation of `0..values.len()`.
    ///
    /// The length must be `2^n` with `1 <= n <= MAX_VARS` and every value must
    /// appear exactly once.
    pub fn new(values: Vec<u32>) -> LogicResult<Self> {
        let len = values.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(LogicError::NotAPowerOfTwo(len));
        }
        let num_vars = len.trailing_zeros();
        if num_vars > MAX_VARS {
            return Err(LogicError::TooManyVariables {
                got: num_vars,
                max: MAX_VARS,
            });
        }

        let mut seen = vec![false; len];
        for (position, &value) in values.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(LogicError::ValueOutOfRange {
                    position,
                    value,
                    size: len,
                })?;
            if *slot {
                return Err(LogicError::NotABijection { value });
            }
            *slot = true;
        }

        Ok(Self { num_vars, values })
    }

    /// The identity permutation on `num_vars` bits.
    pub fn identity(num_vars: u32) -> LogicResult<Self> {
        if num_vars > MAX_VARS {
            return Err(LogicError::TooManyVariables {
                got: num_vars,
                max: MAX_VARS,
            });
        }
        Self::new((0..1u32 << num_vars).collect())
    }

    /// Number of bits.
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Domain size, `2^num_vars`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a permutation has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Image of `x`.
    #[inline]
    pub fn apply(&self, x: u32) -> u32 {
        self.values[x as usize]
    }

    /// The values as a slice, indexed by input.
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    /// The inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut values = vec![0; self.values.len()];
        for (x, &y) in self.values.iter().enumerate() {
            values[y as usize] = x as u32;
        }
        Self {
            num_vars: self.num_vars,
            values,
        }
    }

    /// Whether every value maps to itself.
    pub fn is_identity(&self) -> bool {
        self.values
            .iter()
            .enumerate()
            .all(|(x, &y)| x as u32 == y)
    }
}

impl TryFrom<Vec<u32>> for Permutation {
    type Error = LogicError;

    fn try_from(values: Vec<u32>) -> LogicResult<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[u32]> for Permutation {
    type Error = LogicError;

    fn try_from(values: &[u32]) -> LogicResult<Self> {
        Self::new(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        let perm = Permutation::new(vec![0, 2, 3, 5, 7, 1, 4, 6]).unwrap();
        assert_eq!(perm.num_vars(), 3);
        assert_eq!(perm.apply(3), 5);
        assert!(!perm.is_identity());

        let inv = perm.inverse();
        for x in 0..8 {
            assert_eq!(inv.apply(perm.apply(x)), x);
        }
    }

    #[test]
    fn test_identity() {
        assert!(Permutation::identity(3).unwrap().is_identity());
    }

    #[test]
    fn test_length_must_be_power_of_two() {
        assert!(matches!(
            Permutation::new(vec![0, 1, 2]),
            Err(LogicError::NotAPowerOfTwo(3))
        ));
        assert!(matches!(
            Permutation::new(vec![0]),
            Err(LogicError::NotAPowerOfTwo(1))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Permutation::new(vec![0, 4, 1, 2]),
            Err(LogicError::ValueOutOfRange {
                position: 1,
                value: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_repeated_value_rejected() {
        assert!(matches!(
            Permutation::new(vec![0, 1, 1, 3]),
            Err(LogicError::NotABijection { value: 1 })
        ));
    }
}
