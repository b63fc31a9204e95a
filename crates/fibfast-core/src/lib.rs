//! # fibfast-core
//!
//! Arbitrary-precision Fibonacci engine built on fast doubling.
//!
//! Two lazy step producers ([`LinearSteps`] and [`DoublingSteps`]) feed the
//! index resolver ([`get`]) and the value resolver ([`find`] / [`is`]).
//! [`iterator`] and [`array`] expose bounded or infinite enumeration.

pub mod constants;
pub mod doubling;
pub mod error;
pub mod input;
pub mod linear;
pub mod resolver;
pub mod sequence;
pub mod state;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use doubling::DoublingSteps;
pub use error::FibError;
pub use linear::LinearSteps;
pub use resolver::{find, get, is};
pub use sequence::{array, iterator};
pub use state::FibState;

use num_bigint::BigUint;

/// Compute F(n) using fast doubling.
///
/// Convenience wrapper over [`get`] for callers that only need the value.
///
/// # Example
/// ```
/// assert_eq!(fibfast_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibfast_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    get(n).number
}
