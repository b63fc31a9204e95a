//! Bounded iteration and range materialization.

use tracing::debug;

use crate::error::FibError;
use crate::linear::LinearSteps;
use crate::resolver::get;
use crate::state::FibState;

/// Lazy producer starting at index `start` (default 0) yielding `count`
/// states, or forever when `count` is `None`.
///
/// A non-zero start is resolved with fast doubling before iteration begins.
///
/// # Example
/// ```
/// let fibs: Vec<String> = fibfast_core::iterator(Some(13), Some(2))
///     .map(|s| s.number.to_string())
///     .collect();
/// assert_eq!(fibs, ["233", "377"]);
/// ```
#[must_use]
pub fn iterator(start: Option<u64>, count: Option<u64>) -> LinearSteps {
    let seed = match start {
        Some(k) => get(k),
        None => FibState::origin(),
    };
    match count {
        Some(n) => LinearSteps::bounded(seed, n),
        None => LinearSteps::new(seed),
    }
}

/// States for indices `start..end`, in order.
///
/// Returns an empty vector when `start == end` and [`FibError::Range`]
/// when `end < start`.
pub fn array(start: u64, end: u64) -> Result<Vec<FibState>, FibError> {
    if end < start {
        return Err(FibError::Range { start, end });
    }
    if end == start {
        return Ok(Vec::new());
    }

    let count = end - start;
    debug!(start, count, "materializing range");
    Ok(iterator(Some(start), Some(count)).collect())
}
