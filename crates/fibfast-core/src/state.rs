//! The `(F(k), F(k+1), k)` triple threaded through every producer and resolver.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A position in the Fibonacci sequence together with its successor.
///
/// `next` is always F(`index` + 1), so any producer can compute the following
/// state without recomputing from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FibState {
    /// F(index).
    #[serde(with = "decimal")]
    pub number: BigUint,
    /// F(index + 1).
    #[serde(with = "decimal")]
    pub next: BigUint,
    /// Sequence position of `number`.
    pub index: u64,
}

impl FibState {
    /// Create a state from its parts. The caller guarantees the pair is consecutive.
    #[must_use]
    pub fn new(number: BigUint, next: BigUint, index: u64) -> Self {
        Self {
            number,
            next,
            index,
        }
    }

    /// F(0) = 0, F(1) = 1.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(BigUint::zero(), BigUint::one(), 0)
    }

    /// F(1) = 1, F(2) = 1. Every doubling ascent starts here.
    #[must_use]
    pub fn doubling_seed() -> Self {
        Self::new(BigUint::one(), BigUint::one(), 1)
    }

    /// Advance one index in place: F(k+2) = F(k+1) + F(k).
    pub(crate) fn step(&mut self) {
        let sum = &self.number + &self.next;
        self.number = std::mem::replace(&mut self.next, sum);
        self.index += 1;
    }

    /// Double the index in place:
    ///   F(2k)   = F(k) * (2*F(k+1) - F(k))
    ///   F(2k+1) = F(k+1)^2 + F(k)^2
    pub(crate) fn double(&mut self) {
        // 2*F(k+1) >= F(k) for every k >= 0, so the subtraction never underflows.
        debug_assert!(
            (&self.next << 1u8) >= self.number,
            "state at index {} is not a consecutive Fibonacci pair",
            self.index
        );
        let t = (&self.next << 1u8) - &self.number;
        let f2k = &self.number * &t;
        let f2k1 = &self.next * &self.next + &self.number * &self.number;
        self.number = f2k;
        self.next = f2k1;
        self.index *= 2;
    }
}

/// Serialize big integers as decimal strings so JSON consumers never lose precision.
mod decimal {
    use std::str::FromStr;

    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::from_str(&s).map_err(de::Error::custom)
    }
}
