//! Fast-doubling producer: each advance maps index k to 2k.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Starting from the seed at index 1 the producer visits 1, 2, 4, 8, 16, ...

use std::iter::FusedIterator;

use tracing::trace;

use crate::state::FibState;

/// Infinite producer of Fibonacci states at successively doubled indices.
///
/// # Example
/// ```
/// use fibfast_core::DoublingSteps;
/// let indices: Vec<u64> = DoublingSteps::new().take(5).map(|s| s.index).collect();
/// assert_eq!(indices, [1, 2, 4, 8, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct DoublingSteps {
    current: FibState,
}

impl DoublingSteps {
    /// Producer starting from the canonical seed F(1) = 1, F(2) = 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(FibState::doubling_seed())
    }

    /// Producer starting from an arbitrary state.
    ///
    /// # Panics
    ///
    /// Advancing panics if `seed` is not a consecutive pair, i.e. if
    /// `2 * seed.next < seed.number`. States built by this crate always
    /// satisfy it.
    #[must_use]
    pub fn from_state(seed: FibState) -> Self {
        Self { current: seed }
    }

    /// The state the next call to `next()` would yield.
    #[must_use]
    pub fn peek(&self) -> &FibState {
        &self.current
    }

    /// Double the private state once without yielding it.
    pub fn advance(&mut self) {
        self.current.double();
    }

    /// Apply `doublings` doubling steps and return the landing point.
    ///
    /// From the canonical seed the landing index is `2^doublings`.
    ///
    /// # Panics
    ///
    /// Panics if `doublings > 0` and the seed is not a consecutive pair
    /// (see [`DoublingSteps::from_state`]).
    #[must_use]
    pub fn forward(mut self, doublings: u32) -> FibState {
        for _ in 0..doublings {
            self.current.double();
            trace!(
                index = self.current.index,
                bits = self.current.number.bits(),
                "doubling step"
            );
        }
        self.current
    }
}

impl Default for DoublingSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DoublingSteps {
    type Item = FibState;

    fn next(&mut self) -> Option<Self::Item> {
        let yielded = self.current.clone();
        self.current.double();
        Some(yielded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for DoublingSteps {}
