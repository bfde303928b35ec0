use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::course::Material;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    InProgress,
}

impl EnrollmentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
        }
    }
}

/// One enrollment held by the ledger. `course_name` is the dedup key: a user
/// never holds two records with the same name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub course_name: String,
    pub enrolled_at: NaiveDate,
    pub status: EnrollmentStatus,
    pub materials: Vec<Material>,
}
