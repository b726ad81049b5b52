//! Finding status levels

/// Verdict for a single audited directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingStatus {
    /// Value is in the rule's known-good set
    Ok,
    /// Value is known-risky or not recognized
    Warn,
    /// Directive is not set in the file
    Missing,
}

impl FindingStatus {
    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Ok => "ok",
            FindingStatus::Warn => "warn",
            FindingStatus::Missing => "missing",
        }
    }

    /// Report tag, e.g. `[WARN]`
    pub fn tag(&self) -> &'static str {
        match self {
            FindingStatus::Ok => "[OK]",
            FindingStatus::Warn => "[WARN]",
            FindingStatus::Missing => "[MISSING]",
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
