//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

pub const GENERAL_ERROR: i32 = 1;
pub const ARGUMENT_ERROR: i32 = 2;

/// Map a failure to the process exit code.
///
/// Out-of-range builder arguments exit with `ARGUMENT_ERROR`, like clap's own
/// usage errors; everything else exits with `GENERAL_ERROR`.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    use crate::commands::CommandError;
    use crate::error::Error;

    let invalid = error.chain().any(|cause| {
        cause
            .downcast_ref::<Error>()
            .is_some_and(Error::is_invalid_argument)
            || cause.downcast_ref::<CommandError>().is_some()
    });

    if invalid {
        ARGUMENT_ERROR
    } else {
        GENERAL_ERROR
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// # Verbose Mode Behavior
/// - `verbose = 0`: The message with its causes on one line
/// - `verbose >= 1`: Includes the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    eprintln!("Error: {error:#}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Bound, CommandError};
    use anyhow::Context;

    fn invalid_size() -> CommandError {
        CommandError::InvalidArgument {
            argument: "size",
            value: "0".to_string(),
            expected: Bound::Positive,
        }
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let error = anyhow::Error::new(crate::error::Error::from(invalid_size()));
        assert_eq!(exit_code(&error), ARGUMENT_ERROR);
    }

    #[test]
    fn test_invalid_argument_behind_context() {
        let result: Result<(), CommandError> = Err(invalid_size());
        let error = result.context("Failed to build client command").unwrap_err();
        assert_eq!(exit_code(&error), ARGUMENT_ERROR);
    }

    #[test]
    fn test_other_errors_exit_code() {
        let error = anyhow::Error::new(crate::error::Error::Config("bad".into()));
        assert_eq!(exit_code(&error), GENERAL_ERROR);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), GENERAL_ERROR);
    }
}
