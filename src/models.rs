// ABOUTME: Core data models for the Rollcall roster - teachers, students, and pairs
// ABOUTME: Defines typed records with constructor-level validation of required fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A teacher, keyed by email address.
///
/// Created on first registration that mentions the email and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Surrogate record id
    pub id: Uuid,
    /// Unique email address
    pub email: String,
    /// When the record was first created
    pub date_added: DateTime<Utc>,
}

impl Teacher {
    /// Create a new teacher record
    ///
    /// # Errors
    ///
    /// Returns an error if the email is empty
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AppError::missing_field("teacher email"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            date_added: Utc::now(),
        })
    }
}

/// A student, keyed by email address.
///
/// `date_suspended` starts out unset and transitions to a timestamp via the
/// suspension service; no operation clears it again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Surrogate record id
    pub id: Uuid,
    /// Unique email address
    pub email: String,
    /// When the student was suspended, if ever
    pub date_suspended: Option<DateTime<Utc>>,
    /// When the record was first created
    pub date_added: DateTime<Utc>,
}

impl Student {
    /// Create a new, unsuspended student record
    ///
    /// # Errors
    ///
    /// Returns an error if the email is empty
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AppError::missing_field("student email"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            date_suspended: None,
            date_added: Utc::now(),
        })
    }

    /// Whether the student is currently suspended
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        self.date_suspended.is_some()
    }
}

/// A persisted link between one teacher email and one student email.
///
/// At most one pair exists per `(teacher_email, student_email)` combination;
/// a student may appear under any number of teachers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pair {
    /// Surrogate record id
    pub id: Uuid,
    /// Email of the linked teacher
    pub teacher_email: String,
    /// Email of the linked student
    pub student_email: String,
    /// When the link was first created
    pub date_added: DateTime<Utc>,
}

impl Pair {
    /// Create a new teacher-student link
    ///
    /// # Errors
    ///
    /// Returns an error if either email is empty
    pub fn new(
        teacher_email: impl Into<String>,
        student_email: impl Into<String>,
    ) -> AppResult<Self> {
        let teacher_email = teacher_email.into();
        let student_email = student_email.into();
        if teacher_email.trim().is_empty() {
            return Err(AppError::missing_field("teacher email"));
        }
        if student_email.trim().is_empty() {
            return Err(AppError::missing_field("student email"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            teacher_email,
            student_email,
            date_added: Utc::now(),
        })
    }
}
