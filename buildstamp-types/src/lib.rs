//! Shared DTOs for the buildstamp workspace.
//!
//! # Design constraints
//! - [`BuildRecord`] is serialized by the CLI and mirrored into JavaScript by
//!   the wasm binding, so its five keys are a public contract.
//! - Readers are tolerant: missing keys fall back to the record defaults.

pub mod field;
pub mod record;
pub mod report;

pub use field::{Field, UnknownFieldError};
pub use record::{BuildRecord, FieldValue};
pub use report::{RecordReport, ToolInfo};

/// Schema identifiers.
pub mod schema {
    pub const BUILDSTAMP_RECORD_V1: &str = "buildstamp.record.v1";
}

/// Hostname of a record nobody has populated yet.
pub const NOT_SET: &str = "not set";

/// Text value of a field that was deliberately left out of the build.
pub const REDACTED: &str = "redacted";

/// Revision reported by unstamped builds.
pub const UNSTAMPED_REVISION: &str = "0";
