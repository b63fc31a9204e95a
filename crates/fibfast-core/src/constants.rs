//! Shared constants: small-value table and process exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used as an independent oracle for the producers and resolvers.
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `fibfast` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// The looked-up value is not a Fibonacci number.
    pub const ERROR_NOT_IN_SEQUENCE: i32 = 3;
    /// Invalid or missing argument, or an inverted range.
    pub const ERROR_ARGUMENT: i32 = 4;
}
