//! Preconditions for builder arguments
//!
//! Builders check their inputs before interpolating them so a bad workload
//! value is reported here instead of by the launched binary.

use std::fmt;
use std::path::Path;

/// The condition an argument must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Positive,
    NonNegative,
    FileStem,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("> 0"),
            Self::NonNegative => f.write_str(">= 0"),
            Self::FileStem => f.write_str("a file name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid argument '{argument}': got {value}, expected {expected}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        expected: Bound,
    },
}

impl CommandError {
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}

pub fn ensure_positive(argument: &'static str, value: i64) -> Result<i64, CommandError> {
    check(argument, value, value > 0, Bound::Positive)
}

pub fn ensure_non_negative(argument: &'static str, value: i64) -> Result<i64, CommandError> {
    check(argument, value, value >= 0, Bound::NonNegative)
}

/// Return the file stem of `path`, which names things derived from it.
pub fn ensure_file_stem<'a>(argument: &'static str, path: &'a str) -> Result<&'a str, CommandError> {
    match Path::new(path).file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) if !stem.is_empty() => Ok(stem),
        _ => Err(reject(argument, format!("{path:?}"), Bound::FileStem)),
    }
}

fn check(
    argument: &'static str,
    value: i64,
    ok: bool,
    expected: Bound,
) -> Result<i64, CommandError> {
    if ok {
        Ok(value)
    } else {
        Err(reject(argument, value.to_string(), expected))
    }
}

fn reject(argument: &'static str, value: String, expected: Bound) -> CommandError {
    tracing::trace!(argument, %value, %expected, "Rejected builder argument");
    CommandError::InvalidArgument {
        argument,
        value,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_accepts_one() {
        assert_eq!(ensure_positive("size", 1), Ok(1));
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        for value in [0, -1, i64::MIN] {
            let err = ensure_positive("burst", value).unwrap_err();
            assert_eq!(
                err,
                CommandError::InvalidArgument {
                    argument: "burst",
                    value: value.to_string(),
                    expected: Bound::Positive,
                }
            );
        }
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("rate", 0), Ok(0));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = ensure_non_negative("rate", -5).unwrap_err();
        assert_eq!(err.argument(), "rate");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'rate': got -5, expected >= 0"
        );
    }

    #[test]
    fn test_file_stem_of_log_file() {
        assert_eq!(ensure_file_stem("log_file", "logs/primary-0.log"), Ok("primary-0"));
        assert_eq!(ensure_file_stem("log_file", "worker"), Ok("worker"));
    }

    #[test]
    fn test_file_stem_rejects_paths_without_name() {
        for path in ["", "/", "logs/.."] {
            let err = ensure_file_stem("log_file", path).unwrap_err();
            assert_eq!(
                err,
                CommandError::InvalidArgument {
                    argument: "log_file",
                    value: format!("{path:?}"),
                    expected: Bound::FileStem,
                }
            );
        }
        assert_eq!(
            ensure_file_stem("log_file", "").unwrap_err().to_string(),
            "Invalid argument 'log_file': got \"\", expected a file name"
        );
    }
}
