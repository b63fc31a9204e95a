//! Error type shared by the resolvers, the iteration facade and argument coercion.

use crate::constants::exit_codes;

/// Error type for Fibonacci lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// An index, count or value is negative, fractional or unparsable.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A required argument was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The value is not a Fibonacci number.
    #[error("{0} is not in the Fibonacci sequence")]
    NotInSequence(String),

    /// The end of a range precedes its start.
    #[error("range end {end} is less than range start {start}")]
    Range {
        /// Requested first index.
        start: u64,
        /// Requested end index (exclusive).
        end: u64,
    },
}

impl FibError {
    /// Build an `InvalidArgument` error.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotInSequence(_) => exit_codes::ERROR_NOT_IN_SEQUENCE,
            Self::InvalidArgument { .. } | Self::MissingArgument(_) | Self::Range { .. } => {
                exit_codes::ERROR_ARGUMENT
            }
        }
    }
}
