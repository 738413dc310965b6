//! Process-wide build provenance.
//!
//! The build script stamps five literal values into the crate. A program
//! calls [`init`] once at entry to copy them into the global registry, and
//! everything else reads them through [`system_build_info`].
//!
//! ```no_run
//! fn main() -> Result<(), buildstamp_registry::StartupError> {
//!     let record = buildstamp_registry::init()?;
//!     println!("built from {} ({})", record.revision, record.status);
//!     Ok(())
//! }
//! ```
//!
//! The record is mutable only until its first read. Programs that skip
//! [`init`] still get a well-defined default record (`timestamp = 0`,
//! hostname `"not set"`).

pub mod error;
pub mod registry;
pub mod stamp;

pub use buildstamp_types::{BuildRecord, Field, FieldValue};
pub use error::{RegistryError, StampError, StartupError};
pub use registry::{RegistryState, SystemBuildInfo};
pub use stamp::Stamp;

use tracing::debug;

/// The process-wide build record. Publishes it if nothing has read it yet.
pub fn system_build_info() -> &'static BuildRecord {
    SystemBuildInfo::instance().get_info()
}

/// Start-up initializer: applies the compiled stamp to the process-wide
/// registry and returns the published record.
///
/// Must run before anything reads the record; a second call fails with
/// [`RegistryError::Sealed`].
pub fn init() -> Result<&'static BuildRecord, StartupError> {
    let stamp = Stamp::compiled()?;
    let registry = SystemBuildInfo::instance();
    stamp.apply(registry)?;
    let record = registry.get_info();
    debug!(
        hostname = %record.hostname,
        revision = %record.revision,
        "build record initialized"
    );
    Ok(record)
}
