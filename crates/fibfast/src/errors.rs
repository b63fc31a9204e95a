//! Error handling and exit codes.

use std::io;

use fibfast_core::constants::exit_codes;
use fibfast_core::FibError;

/// Map a top-level error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, FibError::exit_code);
    u8::try_from(code).unwrap_or(1)
}

/// Whether the error is a closed stdout, e.g. `fibfast iter | head`.
#[must_use]
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|e| e.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
