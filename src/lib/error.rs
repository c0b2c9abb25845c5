//! Launcher errors
//!
//! Every error here is a usage error: it is reported before the runlevel is
//! touched and the launcher exits without starting any process. Failures of
//! the processes the launcher starts are not errors, see `SessionReport`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// A known option was given without its value
    #[error("{0}")]
    InvalidArguments(String),

    /// The JVM binary is not in the search path
    #[error("Unable to find '{0}' binary in current PATH")]
    ExecutableNotFound(String),

    /// The launcher must run as root to switch runlevels
    #[error("Unable to execute '{0}' without running as root")]
    PrivilegeRequired(String),
}

impl LaunchError {
    /// Process exit code used for usage errors
    pub fn exit_code(&self) -> i32 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LaunchError::ExecutableNotFound("java".into()).to_string(),
            "Unable to find 'java' binary in current PATH"
        );
        assert_eq!(
            LaunchError::PrivilegeRequired("java-kiosk".into()).to_string(),
            "Unable to execute 'java-kiosk' without running as root"
        );
        assert_eq!(LaunchError::InvalidArguments("bad".into()).exit_code(), 2);
    }
}
