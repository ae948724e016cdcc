// ABOUTME: Database abstraction layer for the Rollcall roster store
// ABOUTME: Plugin architecture with SQLite and in-memory backends behind one trait

use crate::models::{Pair, Student, Teacher};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod factory;
pub mod memory;
pub mod sqlite;

/// Result of an upsert: the record now stored under the key, plus whether
/// this call created it (as opposed to finding an existing one).
#[derive(Debug, Clone)]
pub struct UpsertOutcome<T> {
    /// The record stored under the key after the upsert
    pub record: T,
    /// `true` if the record was created by this call
    pub created: bool,
}

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer. Upserts are keyed on
/// the record's unique email (composite for pairs); the backend's unique
/// constraints are the only protection against concurrent upserts racing.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Teachers
    // ================================

    /// Upsert a teacher keyed by email (create-if-absent, no-op otherwise)
    async fn upsert_teacher(&self, email: &str) -> Result<UpsertOutcome<Teacher>>;

    /// Get teacher by email address
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;

    // ================================
    // Students
    // ================================

    /// Upsert a student keyed by email (create-if-absent, no-op otherwise)
    async fn upsert_student(&self, email: &str) -> Result<UpsertOutcome<Student>>;

    /// Get student by email address
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;

    /// Upsert the student's suspension timestamp, keyed by email
    ///
    /// Creates the record when absent, matching upsert semantics; callers
    /// that require an existing student must check first.
    async fn suspend_student(
        &self,
        email: &str,
        suspended_at: DateTime<Utc>,
    ) -> Result<Student>;

    /// Get students that are not suspended and whose email is in `emails`,
    /// in retrieval order
    async fn get_unsuspended_students(&self, emails: &[String]) -> Result<Vec<Student>>;

    // ================================
    // Pairs
    // ================================

    /// Upsert a pair keyed by the `(teacher_email, student_email)` composite
    async fn upsert_pair(
        &self,
        teacher_email: &str,
        student_email: &str,
    ) -> Result<UpsertOutcome<Pair>>;

    /// Get all pairs whose teacher email is in `teacher_emails`, in
    /// retrieval order
    async fn get_pairs_for_teachers(&self, teacher_emails: &[String]) -> Result<Vec<Pair>>;
}
