// ABOUTME: In-memory implementation of the roster store for tests and local development
// ABOUTME: Vec-backed state preserving insertion order, shared behind an RwLock

//! In-memory database implementation
//!
//! A process-local fake with the same observable behavior as the SQLite
//! backend: upserts keyed on the unique emails, insertion-order retrieval.
//! Intended for tests and ephemeral local runs; nothing is persisted.

use super::{DatabaseProvider, UpsertOutcome};
use crate::models::{Pair, Student, Teacher};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct MemoryState {
    teachers: Vec<Teacher>,
    students: Vec<Student>,
    pairs: Vec<Pair>,
}

/// In-memory database implementation
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryDatabase {
    /// Create an empty in-memory database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DatabaseProvider for MemoryDatabase {
    async fn new(_database_url: &str) -> Result<Self> {
        Ok(Self::default())
    }

    async fn migrate(&self) -> Result<()> {
        Ok(())
    }

    async fn upsert_teacher(&self, email: &str) -> Result<UpsertOutcome<Teacher>> {
        let candidate = Teacher::new(email)?;
        let mut state = self.write();

        if let Some(existing) = state.teachers.iter().find(|t| t.email == email) {
            return Ok(UpsertOutcome {
                record: existing.clone(),
                created: false,
            });
        }

        state.teachers.push(candidate.clone());
        Ok(UpsertOutcome {
            record: candidate,
            created: true,
        })
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        Ok(self
            .read()
            .teachers
            .iter()
            .find(|t| t.email == email)
            .cloned())
    }

    async fn upsert_student(&self, email: &str) -> Result<UpsertOutcome<Student>> {
        let candidate = Student::new(email)?;
        let mut state = self.write();

        if let Some(existing) = state.students.iter().find(|s| s.email == email) {
            return Ok(UpsertOutcome {
                record: existing.clone(),
                created: false,
            });
        }

        state.students.push(candidate.clone());
        Ok(UpsertOutcome {
            record: candidate,
            created: true,
        })
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        Ok(self
            .read()
            .students
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn suspend_student(&self, email: &str, suspended_at: DateTime<Utc>) -> Result<Student> {
        let mut state = self.write();

        if let Some(existing) = state.students.iter_mut().find(|s| s.email == email) {
            existing.date_suspended = Some(suspended_at);
            return Ok(existing.clone());
        }

        let mut candidate = Student::new(email)?;
        candidate.date_suspended = Some(suspended_at);
        state.students.push(candidate.clone());
        Ok(candidate)
    }

    async fn get_unsuspended_students(&self, emails: &[String]) -> Result<Vec<Student>> {
        Ok(self
            .read()
            .students
            .iter()
            .filter(|s| s.date_suspended.is_none() && emails.iter().any(|e| e == &s.email))
            .cloned()
            .collect())
    }

    async fn upsert_pair(
        &self,
        teacher_email: &str,
        student_email: &str,
    ) -> Result<UpsertOutcome<Pair>> {
        let candidate = Pair::new(teacher_email, student_email)?;
        let mut state = self.write();

        if let Some(existing) = state
            .pairs
            .iter()
            .find(|p| p.teacher_email == teacher_email && p.student_email == student_email)
        {
            return Ok(UpsertOutcome {
                record: existing.clone(),
                created: false,
            });
        }

        state.pairs.push(candidate.clone());
        Ok(UpsertOutcome {
            record: candidate,
            created: true,
        })
    }

    async fn get_pairs_for_teachers(&self, teacher_emails: &[String]) -> Result<Vec<Pair>> {
        Ok(self
            .read()
            .pairs
            .iter()
            .filter(|p| teacher_emails.iter().any(|e| e == &p.teacher_email))
            .cloned()
            .collect())
    }
}
