// ABOUTME: Database factory and provider dispatch for multi-backend support
// ABOUTME: Detects the backend from the connection string and delegates trait calls

//! Database factory for creating database providers
//!
//! This module provides automatic database type detection and creation
//! based on connection strings.

use super::memory::MemoryDatabase;
use super::sqlite::SqliteDatabase;
use super::{DatabaseProvider, UpsertOutcome};
use crate::models::{Pair, Student, Teacher};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// File-backed (or sqlite-internal in-memory) SQLite database
    SQLite,
    /// Process-local in-memory store
    Memory,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// SQLite backend
    SQLite(SqliteDatabase),
    /// In-memory backend
    Memory(MemoryDatabase),
}

impl Database {
    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Durable)",
            Self::Memory(_) => "In-Memory (Ephemeral)",
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
            Self::Memory(_) => DatabaseType::Memory,
        }
    }
}

/// Automatically detect database type from connection string
///
/// # Errors
///
/// Returns an error if the URL scheme is not recognized
pub fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("memory:") {
        Ok(DatabaseType::Memory)
    } else {
        Err(anyhow!(
            "Unsupported database URL: {database_url}. Expected sqlite:<path> or memory://"
        ))
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteDatabase::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
            DatabaseType::Memory => {
                let db = MemoryDatabase::new();
                info!("In-memory database initialized");
                Ok(Self::Memory(db))
            }
        }
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
            Self::Memory(db) => db.migrate().await,
        }
    }

    async fn upsert_teacher(&self, email: &str) -> Result<UpsertOutcome<Teacher>> {
        match self {
            Self::SQLite(db) => db.upsert_teacher(email).await,
            Self::Memory(db) => db.upsert_teacher(email).await,
        }
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        match self {
            Self::SQLite(db) => db.get_teacher_by_email(email).await,
            Self::Memory(db) => db.get_teacher_by_email(email).await,
        }
    }

    async fn upsert_student(&self, email: &str) -> Result<UpsertOutcome<Student>> {
        match self {
            Self::SQLite(db) => db.upsert_student(email).await,
            Self::Memory(db) => db.upsert_student(email).await,
        }
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        match self {
            Self::SQLite(db) => db.get_student_by_email(email).await,
            Self::Memory(db) => db.get_student_by_email(email).await,
        }
    }

    async fn suspend_student(&self, email: &str, suspended_at: DateTime<Utc>) -> Result<Student> {
        match self {
            Self::SQLite(db) => db.suspend_student(email, suspended_at).await,
            Self::Memory(db) => db.suspend_student(email, suspended_at).await,
        }
    }

    async fn get_unsuspended_students(&self, emails: &[String]) -> Result<Vec<Student>> {
        match self {
            Self::SQLite(db) => db.get_unsuspended_students(emails).await,
            Self::Memory(db) => db.get_unsuspended_students(emails).await,
        }
    }

    async fn upsert_pair(
        &self,
        teacher_email: &str,
        student_email: &str,
    ) -> Result<UpsertOutcome<Pair>> {
        match self {
            Self::SQLite(db) => db.upsert_pair(teacher_email, student_email).await,
            Self::Memory(db) => db.upsert_pair(teacher_email, student_email).await,
        }
    }

    async fn get_pairs_for_teachers(&self, teacher_emails: &[String]) -> Result<Vec<Pair>> {
        match self {
            Self::SQLite(db) => db.get_pairs_for_teachers(teacher_emails).await,
            Self::Memory(db) => db.get_pairs_for_teachers(teacher_emails).await,
        }
    }
}
