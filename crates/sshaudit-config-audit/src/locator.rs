//! Locating and reading the sshd_config under audit

use crate::parser::decode_lenient;
use sshaudit_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default sshd_config locations, in priority order
pub const DEFAULT_PATHS: &[&str] = &["/etc/ssh/sshd_config", "/etc/sshd_config"];

/// Pick the config path: the explicit one verbatim, else the first existing default
pub fn find_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    find_config_path_in(explicit, DEFAULT_PATHS)
}

/// Same as [`find_config_path`] with a caller-supplied candidate list
///
/// An empty explicit path counts as not given.
pub fn find_config_path_in<P: AsRef<Path>>(
    explicit: Option<&Path>,
    candidates: &[P],
) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path.to_path_buf());
    }

    candidates
        .iter()
        .map(|p| p.as_ref())
        .inspect(|p| debug!("Checking default location {}", p.display()))
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

/// Resolve the path to audit, failing with `ConfigNotFound` if it does not exist
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
    match find_config_path(explicit) {
        Some(path) if path.exists() => Ok(path),
        Some(path) => {
            debug!("Config path {} does not exist", path.display());
            Err(Error::ConfigNotFound)
        }
        None => Err(Error::ConfigNotFound),
    }
}

/// Read the file and decode it, dropping invalid UTF-8 sequences
pub fn read_config(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::unreadable(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_lenient(&bytes))
}
