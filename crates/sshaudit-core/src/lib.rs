//! sshaudit Core - Foundation types and error handling
//!
//! This crate provides the core abstractions shared by the sshaudit crates:
//! - `Finding`: the verdict for one audited directive
//! - `FindingStatus`: ok / warn / missing
//! - `Error`: fatal conditions and their process exit codes

pub mod error;
pub mod finding;
pub mod status;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use finding::Finding;
pub use status::FindingStatus;
