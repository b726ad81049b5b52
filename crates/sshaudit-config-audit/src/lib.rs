//! sshaudit Config Audit - read-only sshd_config auditing
//!
//! This crate provides the audit pipeline:
//! - Locating the sshd_config to inspect
//! - Parsing `Key Value` directives
//! - Evaluating a fixed table of security-relevant directives
//! - Probing the running daemon for its effective configuration
//! - Rendering the text report
//!
//! # Example
//!
//! ```no_run
//! use sshaudit_config_audit::{locator, parser, ConfigAuditor, Reporter};
//!
//! let path = locator::locate(None)?;
//! let text = locator::read_config(&path)?;
//! let directives = parser::parse_sshd_config(&text);
//! let result = ConfigAuditor::new().run_audit(&directives);
//!
//! let mut out = std::io::stdout().lock();
//! Reporter::new(&mut out).write_audit(&path, &result)?;
//! # Ok::<(), sshaudit_core::Error>(())
//! ```

pub mod auditor;
pub mod checks;
pub mod locator;
pub mod parser;
pub mod probe;
pub mod report;

pub use auditor::{AuditResult, AuditSummary, ConfigAuditor};
pub use checks::{DirectiveRule, RULES};
pub use parser::{Directive, DirectiveSet};
pub use probe::{EffectiveConfig, ProbeSpec, EFFECTIVE_KEYWORDS};
pub use report::Reporter;
