use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::prelude::{Error, Result};

pub const FIELD_MAX_LEN: usize = 200;

/// Pipeline stage of a tracked application. Any stage may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum JobStatus {
    #[default]
    Wishlist,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Wishlist => "WISHLIST",
            JobStatus::Applied => "APPLIED",
            JobStatus::Interview => "INTERVIEW",
            JobStatus::Offer => "OFFER",
            JobStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WISHLIST" => Ok(JobStatus::Wishlist),
            "APPLIED" => Ok(JobStatus::Applied),
            "INTERVIEW" => Ok(JobStatus::Interview),
            "OFFER" => Ok(JobStatus::Offer),
            "REJECTED" => Ok(JobStatus::Rejected),
            other => Err(Error::Validation(format!(
                "invalid status {:?}, expected one of WISHLIST, APPLIED, INTERVIEW, OFFER, REJECTED",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i32,
    pub company: String,
    pub title: String,
    pub status: JobStatus,
}

/// A validated create payload, ready for any store.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
}

/// Field subset for an update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: Option<JobStatus>,
}

pub fn validate_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} may not be blank", name)));
    }
    if value.chars().count() > FIELD_MAX_LEN {
        return Err(Error::Validation(format!(
            "{} may not exceed {} characters",
            name, FIELD_MAX_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_wishlist() {
        assert_eq!(JobStatus::default(), JobStatus::Wishlist);
    }

    #[test]
    fn status_parses_every_stage() {
        for raw in ["WISHLIST", "APPLIED", "INTERVIEW", "OFFER", "REJECTED"] {
            let status: JobStatus = raw.parse().unwrap();
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = "GHOSTED".parse::<JobStatus>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&JobStatus::Interview).unwrap();
        assert_eq!(json, r#""INTERVIEW""#);
    }

    #[test]
    fn field_validation_bounds() {
        assert!(validate_field("company", "Acme").is_ok());
        assert!(validate_field("company", &"x".repeat(FIELD_MAX_LEN)).is_ok());
        assert!(matches!(
            validate_field("company", ""),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_field("company", "   "),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_field("company", &"x".repeat(FIELD_MAX_LEN + 1)),
            Err(Error::Validation(_))
        ));
    }
}
