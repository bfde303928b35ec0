use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::course::Material;
use crate::domain::enrollment::EnrollmentStatus;
use crate::errors::BackendError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

/// Course view returned by the persistence backend, mirrored from its store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LmsCourse {
    pub name: String,
    pub status: EnrollmentStatus,
    pub enrolled_at: NaiveDate,
}

/// Outbound persistence collaborator. The core's ledger stays authoritative;
/// a backend is mirrored to when configured and its failures surface as a
/// retry prompt, never a crash.
#[async_trait]
pub trait LmsBackend: Send + Sync {
    async fn create_course(
        &self,
        name: &str,
        description: &str,
        materials: &[Material],
    ) -> Result<CourseId, BackendError>;

    async fn enroll_user(&self, user_id: &str, course_id: &CourseId)
        -> Result<(), BackendError>;

    async fn get_user_courses(&self, user_id: &str) -> Result<Vec<LmsCourse>, BackendError>;
}

/// Default backend for deployments without an LMS: accepts every call and
/// stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLms;

#[async_trait]
impl LmsBackend for NoopLms {
    async fn create_course(
        &self,
        name: &str,
        _description: &str,
        _materials: &[Material],
    ) -> Result<CourseId, BackendError> {
        Ok(CourseId(name.to_ascii_lowercase().replace(' ', "-")))
    }

    async fn enroll_user(
        &self,
        _user_id: &str,
        _course_id: &CourseId,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    async fn get_user_courses(&self, _user_id: &str) -> Result<Vec<LmsCourse>, BackendError> {
        Ok(Vec::new())
    }
}
