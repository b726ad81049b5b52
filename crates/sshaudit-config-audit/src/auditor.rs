//! Configuration auditor - evaluates parsed directives against the rule table

use crate::checks::{DirectiveRule, RULES};
use crate::parser::DirectiveSet;
use sshaudit_core::{Finding, FindingStatus};
use tracing::{debug, info};

/// Auditor that joins a [`DirectiveSet`] against a rule table
pub struct ConfigAuditor {
    rules: &'static [DirectiveRule],
}

/// Result of a full audit run
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// One finding per rule, in rule order
    pub findings: Vec<Finding>,
    /// Summary statistics
    pub summary: AuditSummary,
}

/// Counts per finding status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub ok: usize,
    pub warn: usize,
    pub missing: usize,
}

impl AuditSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            summary.record(finding.status);
        }
        summary
    }

    fn record(&mut self, status: FindingStatus) {
        match status {
            FindingStatus::Ok => self.ok += 1,
            FindingStatus::Warn => self.warn += 1,
            FindingStatus::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.warn + self.missing
    }
}

impl ConfigAuditor {
    /// Create an auditor over the built-in rules
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Create an auditor over a custom rule table
    pub fn with_rules(rules: &'static [DirectiveRule]) -> Self {
        Self { rules }
    }

    /// Evaluate every rule; never fails
    pub fn run_audit(&self, directives: &DirectiveSet) -> AuditResult {
        info!(
            "Auditing {} directives against {} rules",
            directives.len(),
            self.rules.len()
        );

        let findings: Vec<Finding> = self
            .rules
            .iter()
            .map(|rule| evaluate(rule, directives.get(rule.directive)))
            .collect();
        let summary = AuditSummary::from_findings(&findings);

        info!(
            "Audit complete: {} ok, {} warn, {} missing",
            summary.ok, summary.warn, summary.missing
        );

        AuditResult { findings, summary }
    }
}

impl Default for ConfigAuditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single directive value
pub fn evaluate(rule: &DirectiveRule, value: Option<&str>) -> Finding {
    let Some(value) = value else {
        debug!("{} not set", rule.directive);
        return Finding::missing(rule.directive);
    };

    let normalized = value.to_lowercase();
    let finding = if rule.is_good(&normalized) {
        Finding::ok(rule.directive, value)
    } else if rule.is_warn(&normalized) {
        Finding::warn(rule.directive, value)
    } else {
        Finding::atypical(rule.directive, value)
    };

    debug!("{} = {:?} -> {}", rule.directive, value, finding.status);
    finding
}
