//! Live effective-configuration probe (`sshd -T`)
//!
//! The probe is best-effort. Every failure mode (missing binary, permission
//! denied, non-zero exit, timeout) collapses to `None` inside this module and
//! never reaches the caller as an error.

use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

/// Directives shown from the effective configuration, matched case-insensitively
pub const EFFECTIVE_KEYWORDS: &[&str] = &[
    "PermitRootLogin",
    "PasswordAuthentication",
    "PubkeyAuthentication",
    "X11Forwarding",
];

/// Default probe timeout
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Command used to dump the daemon's effective configuration
#[derive(Debug, Clone)]
pub struct ProbeSpec {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl ProbeSpec {
    /// `sshd -T` with the default timeout
    pub fn sshd() -> Self {
        Self::new("sshd", ["-T"])
    }

    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Command line as shown in the report, e.g. `sshd -T`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ProbeSpec {
    fn default() -> Self {
        Self::sshd()
    }
}

#[derive(Debug, Error)]
enum ProbeError {
    #[error("failed to run probe: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("probe timed out after {0:?}")]
    TimedOut(Duration),

    #[error("probe exited with status {0:?}")]
    Failed(Option<i32>),
}

/// Captured output of a successful probe
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// Command line that produced the output
    pub command: String,
    pub output: String,
}

impl EffectiveConfig {
    /// Lines mentioning one of [`EFFECTIVE_KEYWORDS`]
    pub fn relevant_lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines().filter(|line| mentions_keyword(line))
    }
}

fn mentions_keyword(line: &str) -> bool {
    let line = line.to_lowercase();
    EFFECTIVE_KEYWORDS
        .iter()
        .any(|k| line.contains(&k.to_lowercase()))
}

async fn run_probe(spec: &ProbeSpec) -> Result<String, ProbeError> {
    let child = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()?;

    // Dropping the child on timeout kills it
    let output = timeout(spec.timeout, child.wait_with_output())
        .await
        .map_err(|_| ProbeError::TimedOut(spec.timeout))??;

    if !output.status.success() {
        return Err(ProbeError::Failed(output.status.code()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run the probe; `None` on any failure
pub async fn probe_effective_config(spec: &ProbeSpec) -> Option<EffectiveConfig> {
    let command = spec.command_line();
    debug!("Probing effective configuration with `{}`", command);

    match run_probe(spec).await {
        Ok(output) => {
            info!("`{}` returned {} bytes", command, output.len());
            Some(EffectiveConfig { command, output })
        }
        Err(e) => {
            debug!("Skipping effective configuration: {}", e);
            None
        }
    }
}
