//! Error taxonomy of the interpreter.
//!
//! [`ShellError`] ends the session with a failure status. [`LaunchError`] only
//! concerns a single external command and is reported before the loop goes on.

use std::io;
use thiserror::Error;

/// Unrecoverable condition; the process terminates with a failure status.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Failure to run one external command.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{name}: command not found")]
    NotFound { name: String },
    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name}: wait failed: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// The program name the user typed.
    pub fn name(&self) -> &str {
        match self {
            LaunchError::NotFound { name }
            | LaunchError::Spawn { name, .. }
            | LaunchError::Wait { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_mentions_program_name() {
        let err = LaunchError::NotFound {
            name: "frobnicate".to_string(),
        };
        assert_eq!(err.name(), "frobnicate");
        assert_eq!(err.to_string(), "frobnicate: command not found");

        let err = LaunchError::Spawn {
            name: "ls".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("ls: "));
    }
}
