use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::enrollment::EnrollmentRecord;

/// Per-user enrollment records, insertion order preserved. The ledger is the
/// single source of truth for what a user is enrolled in; front-ends query it
/// on every render instead of holding their own copies.
///
/// Interior locking serializes mutation so one ledger can be shared behind an
/// `Arc` across concurrent turns. Concurrent inserts for the same user cannot
/// produce duplicate `course_name` entries.
#[derive(Debug, Default)]
pub struct EnrollmentLedger {
    records_by_user: Mutex<HashMap<String, Vec<EnrollmentRecord>>>,
}

impl EnrollmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent append: a record whose `course_name` already exists for the
    /// user is a no-op, preserving the original `enrolled_at`. Returns whether
    /// the record was actually appended.
    pub fn insert(&self, user_id: &str, record: EnrollmentRecord) -> bool {
        let mut records_by_user =
            self.records_by_user.lock().unwrap_or_else(PoisonError::into_inner);
        let records = records_by_user.entry(user_id.to_string()).or_default();
        if records.iter().any(|existing| existing.course_name == record.course_name) {
            return false;
        }
        records.push(record);
        true
    }

    /// Enrollment-order records for the user; empty for unknown users, never
    /// an error.
    pub fn list_all(&self, user_id: &str) -> Vec<EnrollmentRecord> {
        let records_by_user = self.records_by_user.lock().unwrap_or_else(PoisonError::into_inner);
        records_by_user.get(user_id).cloned().unwrap_or_default()
    }

    pub fn len(&self, user_id: &str) -> usize {
        let records_by_user = self.records_by_user.lock().unwrap_or_else(PoisonError::into_inner);
        records_by_user.get(user_id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, user_id: &str) -> bool {
        self.len(user_id) == 0
    }
}
