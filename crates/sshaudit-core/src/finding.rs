//! Finding definitions - per-directive audit verdicts

use crate::status::FindingStatus;

/// Note attached to directives that are not set in the file
pub const MISSING_NOTE: &str =
    "Key not set explicitly (may be default). Check default for your distro.";

/// Verdict for one rule-table directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Directive name as it appears in the rule table
    pub directive: String,
    pub status: FindingStatus,
    /// Human-readable explanation
    pub note: String,
}

impl Finding {
    pub fn ok(directive: &str, value: &str) -> Self {
        Self {
            directive: directive.to_string(),
            status: FindingStatus::Ok,
            note: format!("{} = {}", directive, value),
        }
    }

    pub fn warn(directive: &str, value: &str) -> Self {
        Self {
            directive: directive.to_string(),
            status: FindingStatus::Warn,
            note: format!("{} = {}", directive, value),
        }
    }

    /// Warning for a value found in neither the good nor the warn set
    pub fn atypical(directive: &str, value: &str) -> Self {
        Self {
            directive: directive.to_string(),
            status: FindingStatus::Warn,
            note: format!("{} = {} (unknown/atypical)", directive, value),
        }
    }

    pub fn missing(directive: &str) -> Self {
        Self {
            directive: directive.to_string(),
            status: FindingStatus::Missing,
            note: MISSING_NOTE.to_string(),
        }
    }
}
