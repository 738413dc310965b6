use crate::field::Field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Build provenance captured when the binary was produced.
///
/// Deserialization is tolerant: absent keys take the values of
/// [`BuildRecord::default`], unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildRecord {
    /// Seconds since the Unix epoch. `0` means the build was not stamped.
    pub timestamp: i32,
    pub hostname: String,
    pub user: String,
    /// Source control revision, e.g. a git commit SHA.
    pub revision: String,
    /// Working tree status at build time, e.g. `clean` or `modified`.
    pub status: String,
}

impl Default for BuildRecord {
    fn default() -> Self {
        Self {
            timestamp: 0,
            hostname: crate::NOT_SET.to_string(),
            user: String::new(),
            revision: String::new(),
            status: String::new(),
        }
    }
}

/// Borrowed value of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(i32),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl BuildRecord {
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Timestamp => FieldValue::Int(self.timestamp),
            Field::Hostname => FieldValue::Text(&self.hostname),
            Field::User => FieldValue::Text(&self.user),
            Field::Revision => FieldValue::Text(&self.revision),
            Field::Status => FieldValue::Text(&self.status),
        }
    }

    /// Iterates `(field, value)` pairs in record order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, FieldValue<'_>)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.value_of(f)))
    }

    /// Build time as a UTC instant, or `None` for unstamped builds.
    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp(i64::from(self.timestamp), 0)
    }

    /// Copy of the record with the given fields replaced by the values an
    /// unstamped build reports (`0` for the timestamp, `redacted` for text).
    pub fn redacted(&self, fields: &[Field]) -> BuildRecord {
        let mut out = self.clone();
        for field in fields {
            match field {
                Field::Timestamp => out.timestamp = 0,
                Field::Hostname => out.hostname = crate::REDACTED.to_string(),
                Field::User => out.user = crate::REDACTED.to_string(),
                Field::Revision => out.revision = crate::REDACTED.to_string(),
                Field::Status => out.status = crate::REDACTED.to_string(),
            }
        }
        out
    }
}
