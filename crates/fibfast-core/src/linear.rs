//! Lazy Fibonacci producer using the standard additive recurrence.

use std::iter::FusedIterator;

use tracing::trace;

use crate::state::FibState;

/// Lazy producer of consecutive Fibonacci states, one index per element.
///
/// Yields the seed first, then F(k+1), F(k+2), ... With a limit it yields
/// exactly that many states and then ends; without one it never ends.
///
/// # Example
/// ```
/// use fibfast_core::{FibState, LinearSteps};
/// let fibs: Vec<_> = LinearSteps::new(FibState::origin())
///     .take(7)
///     .map(|s| s.number.to_string())
///     .collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearSteps {
    current: FibState,
    remaining: Option<u64>,
}

impl LinearSteps {
    /// Infinite producer starting at `seed`.
    #[must_use]
    pub fn new(seed: FibState) -> Self {
        Self {
            current: seed,
            remaining: None,
        }
    }

    /// Producer starting at `seed` that yields exactly `limit` states.
    #[must_use]
    pub fn bounded(seed: FibState, limit: u64) -> Self {
        Self {
            current: seed,
            remaining: Some(limit),
        }
    }

    /// The state the next call to `next()` would yield.
    #[must_use]
    pub fn peek(&self) -> &FibState {
        &self.current
    }

    /// Elements left before the producer ends, or `None` if unbounded.
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Step the private state one index without yielding it. Any limit is ignored.
    pub fn advance(&mut self) {
        self.current.step();
    }

    /// Consume the producer and return the state it would yield next.
    #[must_use]
    pub fn into_state(self) -> FibState {
        self.current
    }

    /// Advance `steps` indices and return the state landed on.
    ///
    /// Intermediate states are never cloned, so this is the path the
    /// resolvers use to close a residual. Any limit is ignored.
    #[must_use]
    pub fn forward(mut self, steps: u64) -> FibState {
        for _ in 0..steps {
            self.current.step();
        }
        trace!(index = self.current.index, steps, "linear forward");
        self.current
    }
}

impl Iterator for LinearSteps {
    type Item = FibState;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }
        let yielded = self.current.clone();
        self.current.step();
        Some(yielded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(left) => match usize::try_from(left) {
                Ok(left) => (left, Some(left)),
                Err(_) => (usize::MAX, None),
            },
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LinearSteps {}
