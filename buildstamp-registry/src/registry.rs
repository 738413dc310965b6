//! The process-wide build record holder.
//!
//! A registry moves through two phases:
//! - **staging**: setters overwrite individual fields; nothing has read the
//!   record yet.
//! - **published**: the first [`SystemBuildInfo::get_info`] call freezes the
//!   staged record. Every later write is rejected with
//!   [`RegistryError::Sealed`].

use crate::error::RegistryError;
use buildstamp_types::{BuildRecord, Field};
use std::sync::{LazyLock, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, warn};

static INSTANCE: LazyLock<SystemBuildInfo> = LazyLock::new(SystemBuildInfo::new);

/// Whether the start-up initializer has written anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Only the default record is available.
    Unpopulated,
    /// At least one setter succeeded.
    Populated,
}

#[derive(Debug, Default)]
struct Staged {
    record: BuildRecord,
    populated: bool,
    sealed: bool,
}

/// Holder of one [`BuildRecord`].
///
/// Use [`SystemBuildInfo::instance`] for the process-wide registry, or
/// [`SystemBuildInfo::new`] for an explicitly owned one.
#[derive(Debug)]
pub struct SystemBuildInfo {
    staged: Mutex<Staged>,
    published: OnceLock<BuildRecord>,
}

impl Default for SystemBuildInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBuildInfo {
    /// A registry holding the default record.
    pub fn new() -> Self {
        Self {
            staged: Mutex::new(Staged::default()),
            published: OnceLock::new(),
        }
    }

    /// The process-wide registry, built with defaults on first use.
    pub fn instance() -> &'static SystemBuildInfo {
        &INSTANCE
    }

    /// Returns the record, publishing it on the first call.
    pub fn get_info(&self) -> &BuildRecord {
        self.published.get_or_init(|| {
            let mut staged = self.lock_staged();
            // Flipped under the lock so no write can slip in between the
            // snapshot and the OnceLock store.
            staged.sealed = true;
            debug!(populated = staged.populated, "publishing build record");
            staged.record.clone()
        })
    }

    pub fn state(&self) -> RegistryState {
        if self.lock_staged().populated {
            RegistryState::Populated
        } else {
            RegistryState::Unpopulated
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.lock_staged().sealed
    }

    pub fn set_timestamp(&self, timestamp: i32) -> Result<(), RegistryError> {
        self.write(Field::Timestamp, |r| r.timestamp = timestamp)
    }

    pub fn set_hostname(&self, hostname: impl Into<String>) -> Result<(), RegistryError> {
        let hostname = hostname.into();
        self.write(Field::Hostname, |r| r.hostname = hostname)
    }

    pub fn set_user(&self, user: impl Into<String>) -> Result<(), RegistryError> {
        let user = user.into();
        self.write(Field::User, |r| r.user = user)
    }

    pub fn set_revision(&self, revision: impl Into<String>) -> Result<(), RegistryError> {
        let revision = revision.into();
        self.write(Field::Revision, |r| r.revision = revision)
    }

    pub fn set_status(&self, status: impl Into<String>) -> Result<(), RegistryError> {
        let status = status.into();
        self.write(Field::Status, |r| r.status = status)
    }

    fn write(
        &self,
        field: Field,
        apply: impl FnOnce(&mut BuildRecord),
    ) -> Result<(), RegistryError> {
        let mut staged = self.lock_staged();
        if staged.sealed {
            warn!(%field, "ignoring write to published build record");
            return Err(RegistryError::Sealed { field });
        }
        apply(&mut staged.record);
        staged.populated = true;
        Ok(())
    }

    // Poisoning is ignored: the staged record is plain data.
    fn lock_staged(&self) -> MutexGuard<'_, Staged> {
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
