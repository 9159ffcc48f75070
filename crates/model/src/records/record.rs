use crate::pagination::cursor::CursorPosition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `resource_context` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub resource_id: String,
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(
        resource_id: impl Into<String>,
        resource_type: impl Into<String>,
        context: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Record {
            resource_id: resource_id.into(),
            resource_type: resource_type.into(),
            context,
            created_at,
            updated_at: created_at,
        }
    }

    /// The record's place in the pagination order.
    pub fn position(&self) -> CursorPosition {
        CursorPosition {
            created_at: self.created_at,
            resource_type: self.resource_type.clone(),
            resource_id: self.resource_id.clone(),
        }
    }
}
