//! Index and value resolution.
//!
//! Both resolvers run in two phases: one doubling run from the seed at
//! index 1, then one linear run to close the remaining distance.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use tracing::debug;

use crate::doubling::DoublingSteps;
use crate::error::FibError;
use crate::linear::LinearSteps;
use crate::state::FibState;

/// Return the state at index `k`.
///
/// Lands on `2^floor(log2 k)` by doubling, then walks the residual
/// `k - 2^floor(log2 k)` one index at a time. The residual can be as large
/// as `2^floor(log2 k) - 1`.
///
/// # Example
/// ```
/// let state = fibfast_core::get(23);
/// assert_eq!(state.index, 23);
/// assert_eq!(state.number.to_string(), "28657");
/// ```
#[must_use]
pub fn get(k: u64) -> FibState {
    if k == 0 {
        return FibState::origin();
    }

    let doublings = 63 - k.leading_zeros();
    let landing = DoublingSteps::new().forward(doublings);
    let residual = k - landing.index;
    debug!(k, doublings, residual, "resolving index");

    if residual > 0 {
        LinearSteps::new(landing).forward(residual)
    } else {
        landing
    }
}

/// Return the state whose `number` equals `target`.
///
/// Value 0 resolves to index 0 and value 1 to index 1 (the lower of the two
/// indices holding 1). Negative values and values between Fibonacci
/// numbers fail with [`FibError::NotInSequence`].
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// let state = fibfast_core::find(&BigInt::from(55)).unwrap();
/// assert_eq!(state.index, 10);
/// assert!(fibfast_core::find(&BigInt::from(378)).is_err());
/// ```
pub fn find(target: &BigInt) -> Result<FibState, FibError> {
    let Some(target) = target.to_biguint() else {
        return Err(FibError::NotInSequence(target.to_string()));
    };

    if target.is_zero() {
        return Ok(FibState::origin());
    }
    if target.is_one() {
        return Ok(FibState::doubling_seed());
    }

    let prev = bracket(&target);
    debug!(from = prev.index, "linear convergence");

    let mut fibs = LinearSteps::new(prev);
    while fibs.peek().number < target {
        fibs.advance();
    }

    let found = fibs.into_state();
    if found.number == target {
        debug!(index = found.index, "value found");
        Ok(found)
    } else {
        debug!(overshoot = found.index, "value not in sequence");
        Err(FibError::NotInSequence(target.to_string()))
    }
}

/// Check whether `target` is a Fibonacci number.
///
/// Only [`FibError::NotInSequence`] maps to `false`; any other error from
/// [`find`] propagates.
pub fn is(target: &BigInt) -> Result<bool, FibError> {
    match find(target) {
        Ok(_) => Ok(true),
        Err(FibError::NotInSequence(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Ascend by doubling while the yielded value stays at or below `target`.
///
/// Returns the last state not exceeding `target`, or the origin if even
/// the seed exceeds it.
fn bracket(target: &BigUint) -> FibState {
    let mut prev = FibState::origin();
    let mut dbl = DoublingSteps::new();
    while dbl.peek().number <= *target {
        prev.clone_from(dbl.peek());
        dbl.advance();
    }
    debug!(
        below = prev.index,
        above = dbl.peek().index,
        "target bracketed"
    );
    prev
}
