//! Build stamp: the literal values written into the registry at start-up.

use crate::error::{RegistryError, StampError};
use crate::registry::SystemBuildInfo;
use buildstamp_types::{BuildRecord, REDACTED, UNSTAMPED_REVISION};
use tracing::debug;

/// Variable names carrying the stamp, shared with the build script.
pub mod keys {
    pub const BUILD_TIMESTAMP: &str = "BUILD_TIMESTAMP";
    pub const BUILD_HOST: &str = "BUILD_HOST";
    pub const BUILD_USER: &str = "BUILD_USER";
    pub const BUILD_SCM_REVISION: &str = "BUILD_SCM_REVISION";
    pub const BUILD_SCM_STATUS: &str = "BUILD_SCM_STATUS";

    pub const ALL: [&str; 5] = [
        BUILD_TIMESTAMP,
        BUILD_HOST,
        BUILD_USER,
        BUILD_SCM_REVISION,
        BUILD_SCM_STATUS,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub timestamp: i32,
    pub hostname: String,
    pub user: String,
    pub revision: String,
    pub status: String,
}

impl Stamp {
    /// The stamp the build script baked into this binary.
    pub fn compiled() -> Result<Stamp, StampError> {
        Self::from_vars(compiled_var)
    }

    /// Values reported when stamping is turned off.
    pub fn unstamped() -> Stamp {
        Stamp {
            timestamp: 0,
            hostname: REDACTED.to_string(),
            user: REDACTED.to_string(),
            revision: UNSTAMPED_REVISION.to_string(),
            status: REDACTED.to_string(),
        }
    }

    /// Assembles a stamp from a variable lookup (see [`keys`]).
    ///
    /// Text values are taken as-is, including empty strings. The timestamp
    /// must parse as an `i32` after trimming.
    pub fn from_vars<F>(lookup: F) -> Result<Stamp, StampError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).ok_or(StampError::Missing { key });

        let raw_timestamp = get(keys::BUILD_TIMESTAMP)?;
        let timestamp = raw_timestamp
            .trim()
            .parse::<i32>()
            .map_err(|source| StampError::InvalidTimestamp {
                value: raw_timestamp.clone(),
                source,
            })?;

        Ok(Stamp {
            timestamp,
            hostname: get(keys::BUILD_HOST)?,
            user: get(keys::BUILD_USER)?,
            revision: get(keys::BUILD_SCM_REVISION)?,
            status: get(keys::BUILD_SCM_STATUS)?,
        })
    }

    /// Writes every field into `registry`, calling each setter once.
    pub fn apply(&self, registry: &SystemBuildInfo) -> Result<(), RegistryError> {
        registry.set_timestamp(self.timestamp)?;
        registry.set_hostname(self.hostname.as_str())?;
        registry.set_user(self.user.as_str())?;
        registry.set_revision(self.revision.as_str())?;
        registry.set_status(self.status.as_str())?;
        debug!(
            timestamp = self.timestamp,
            revision = %self.revision,
            status = %self.status,
            "applied build stamp"
        );
        Ok(())
    }

    pub fn into_record(self) -> BuildRecord {
        BuildRecord {
            timestamp: self.timestamp,
            hostname: self.hostname,
            user: self.user,
            revision: self.revision,
            status: self.status,
        }
    }
}

fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        keys::BUILD_TIMESTAMP => option_env!("BUILD_TIMESTAMP"),
        keys::BUILD_HOST => option_env!("BUILD_HOST"),
        keys::BUILD_USER => option_env!("BUILD_USER"),
        keys::BUILD_SCM_REVISION => option_env!("BUILD_SCM_REVISION"),
        keys::BUILD_SCM_STATUS => option_env!("BUILD_SCM_STATUS"),
        _ => None,
    };
    value.map(str::to_string)
}
