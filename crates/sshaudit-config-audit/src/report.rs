//! Plain-text audit report

use crate::auditor::{AuditResult, AuditSummary};
use crate::probe::EffectiveConfig;
use sshaudit_core::{Finding, FindingStatus};
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Writes the report to any [`Write`] sink
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Header, one line per finding, and the summary
    pub fn write_audit(&mut self, path: &Path, result: &AuditResult) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "SSH Audit Report for: {}", path.display())?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;

        for finding in &result.findings {
            writeln!(self.out, "{}", format_finding(finding))?;
        }

        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{}", format_summary(&result.summary))?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Effective-configuration lines that mention an audited keyword
    pub fn write_effective(&mut self, effective: &EffectiveConfig) -> io::Result<()> {
        writeln!(self.out, "{} output (effective config):", effective.command)?;
        for line in effective.relevant_lines() {
            writeln!(self.out, "  {}", line)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Tagged finding line; `[MISSING]` overflows the tag column, so its key column is narrower
pub fn format_finding(finding: &Finding) -> String {
    let key_width = match finding.status {
        FindingStatus::Missing => 22,
        FindingStatus::Ok | FindingStatus::Warn => 25,
    };
    format!(
        "{:<8}{:<key_width$} - {}",
        finding.status.tag(),
        finding.directive,
        finding.note
    )
}

pub fn format_summary(summary: &AuditSummary) -> String {
    format!(
        "Summary: OK={} WARN={} MISSING={}",
        summary.ok, summary.warn, summary.missing
    )
}
