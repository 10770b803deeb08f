use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::prelude::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NoteEntry {
    pub id: i32,
    #[serde(rename = "job")]
    pub job_id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub job_id: i32,
    pub text: String,
}

/// Field subset for an update. `created_at` is not updatable.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub job_id: Option<i32>,
    pub text: Option<String>,
}

pub fn validate_text(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation("text may not be blank".into()));
    }
    Ok(())
}
