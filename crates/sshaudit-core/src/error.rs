//! Error types for sshaudit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using sshaudit Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit status when no sshd_config could be located
pub const EXIT_NOT_FOUND: i32 = 2;

/// Exit status when the located sshd_config could not be read
pub const EXIT_UNREADABLE: i32 = 3;

/// sshaudit error types
#[derive(Error, Debug)]
pub enum Error {
    // === Audit Input Errors ===
    #[error("Error: sshd_config file not found. Use --file to specify path.")]
    ConfigNotFound,

    #[error("Unable to read {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Tool Settings Errors ===
    #[error("Configuration error: {0}")]
    Configuration(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build the unreadable-file error for `path`
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ConfigUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Check if this error concerns the audited sshd_config itself
    pub fn is_audit_input(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound | Error::ConfigUnreadable { .. }
        )
    }

    /// Get an error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Error::ConfigNotFound => "CONFIG_NOT_FOUND",
            Error::ConfigUnreadable { .. } => "CONFIG_UNREADABLE",
            Error::Configuration(_) => "SETTINGS_ERROR",
            Error::Io(_) => "IO_ERROR",
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigNotFound => EXIT_NOT_FOUND,
            Error::ConfigUnreadable { .. } => EXIT_UNREADABLE,
            Error::Configuration(_) | Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_are_distinct() {
        let not_found = Error::ConfigNotFound;
        let unreadable = Error::unreadable(
            "/etc/ssh/sshd_config",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(unreadable.exit_code(), 3);
        assert_ne!(not_found.exit_code(), 0);
        assert_eq!(Error::Configuration("bad".into()).exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::ConfigNotFound.to_string(),
            "Error: sshd_config file not found. Use --file to specify path."
        );

        let err = Error::unreadable(
            "/tmp/sshd_config",
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert_eq!(err.to_string(), "Unable to read /tmp/sshd_config: Permission denied");
        assert_eq!(err.code(), "CONFIG_UNREADABLE");
        assert!(err.is_audit_input());
    }

    #[test]
    fn test_io_is_not_audit_input() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!err.is_audit_input());
        assert_eq!(err.code(), "IO_ERROR");
    }
}
