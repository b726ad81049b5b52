//! sshaudit - read-only sshd_config auditor
//!
//! Locates an sshd_config, evaluates a fixed set of security-relevant
//! directives, prints a text report and, when the daemon allows it, the
//! matching lines of its effective configuration.

use anyhow::Result;
use clap::Parser;
use sshaudit_common::{logging, Config};
use sshaudit_config_audit::{locator, parser, probe, ConfigAuditor, ProbeSpec, Reporter};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Simple SSHD config auditor (read-only)
#[derive(Parser, Debug)]
#[command(name = "sshaudit")]
#[command(about = "Simple SSHD config auditor (read-only).", long_about = None)]
struct Args {
    /// Path to sshd_config (default: auto /etc/ssh/sshd_config)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;
    logging::init_logging_with_config(logging::LogConfig::from(&config.logging));

    debug!("sshaudit v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args, &config).await {
        if !e.is_audit_input() {
            return Err(e.into());
        }
        debug!("Audit aborted: {} ({})", e, e.code());
        println!("{}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

/// Locate, parse, audit and report
async fn run(args: &Args, config: &Config) -> sshaudit_core::Result<()> {
    let path = locator::locate(args.file.as_deref())?;
    info!("Auditing {}", path.display());

    let text = locator::read_config(&path)?;
    let directives = parser::parse_sshd_config(&text);
    let result = ConfigAuditor::new().run_audit(&directives);

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    reporter.write_audit(&path, &result)?;

    if config.probe.enabled {
        if let Some(effective) = probe::probe_effective_config(&ProbeSpec::sshd()).await {
            reporter.write_effective(&effective)?;
        }
    } else {
        debug!("Effective configuration probe disabled");
    }

    reporter.into_inner().flush()?;
    Ok(())
}
