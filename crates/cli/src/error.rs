//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map catalog errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.

use keysheet_catalog::{LoadError, NormalizeError};
use thiserror::Error;

/// Structured exit codes for keysheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (I/O, bad arguments).
    GeneralError = 1,

    /// Invalid input - a document is not JSON or has an unrecognized shape.
    ///
    /// Scripts should fix the document rather than retry.
    InvalidInput = 2,

    /// Audit failed - duplicate or missing identifiers were found.
    AuditFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// An identifier audit found problems.
#[derive(Error, Debug)]
#[error("Identifier audit failed: {duplicates} duplicate id(s), {missing} missing id(s)")]
pub struct AuditFailure {
    pub duplicates: usize,
    pub missing: usize,
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Invalid { .. } | LoadError::Bundled(_) | LoadError::NoUsableSource { .. } => {
                ExitCode::InvalidInput
            }
            LoadError::Read { .. } | LoadError::ReadDir { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<AuditFailure>().is_some() {
                return ExitCode::AuditFailed;
            }
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if cause.downcast_ref::<NormalizeError>().is_some()
                || cause.downcast_ref::<serde_json::Error>().is_some()
            {
                return ExitCode::InvalidInput;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidInput.as_i32(), 2);
        assert_eq!(ExitCode::AuditFailed.as_i32(), 3);
    }

    #[test]
    fn test_from_load_error() {
        let err = LoadError::NoUsableSource { attempts: vec![] };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidInput);

        let err = LoadError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_in_chain() {
        let err = anyhow::Error::new(AuditFailure {
            duplicates: 1,
            missing: 0,
        })
        .context("ids check");
        assert_eq!(err.exit_code(), ExitCode::AuditFailed);

        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = parse.context("Failed to parse a.json").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::InvalidInput);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
