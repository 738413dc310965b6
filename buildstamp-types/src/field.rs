use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five fields of a [`BuildRecord`](crate::BuildRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Timestamp,
    Hostname,
    User,
    Revision,
    Status,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Field; 5] = [
        Field::Timestamp,
        Field::Hostname,
        Field::User,
        Field::Revision,
        Field::Status,
    ];

    /// Key used for this field in JSON output and host objects.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::Hostname => "hostname",
            Field::User => "user",
            Field::Revision => "revision",
            Field::Status => "status",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Field::Timestamp)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown build record field '{name}' (expected one of timestamp, hostname, user, revision, status)")]
pub struct UnknownFieldError {
    pub name: String,
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| UnknownFieldError {
                name: s.to_string(),
            })
    }
}
