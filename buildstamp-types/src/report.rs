use crate::record::BuildRecord;
use serde::{Deserialize, Serialize};

/// JSON envelope for a printed build record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub record: BuildRecord,
}

impl RecordReport {
    pub fn new(tool: ToolInfo, record: BuildRecord) -> Self {
        Self {
            schema: crate::schema::BUILDSTAMP_RECORD_V1.to_string(),
            tool,
            record,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
