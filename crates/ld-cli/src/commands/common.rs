//! Shared utilities for CLI commands

use std::fmt;

/// Error type representing a non-zero process exit code.
///
/// Return `Err(ExitCode(N).into())` instead of calling `std::process::exit`
/// so destructors run; `main` turns it into the exit status.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; nothing to show the operator.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}
