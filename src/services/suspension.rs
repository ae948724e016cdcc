// ABOUTME: Suspension service - marks a student record as suspended
// ABOUTME: Requires an existing student, then upserts the suspension timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use tracing::info;

/// Suspend the student with the given email.
///
/// Fails when no such student exists; otherwise sets `date_suspended` to
/// the current time via an upsert keyed on the email. Suspending an
/// already-suspended student succeeds and refreshes the timestamp; there is
/// no un-suspend operation.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no student record exists for the email,
/// or a database error if the lookup or update fails.
pub async fn suspend<DB: DatabaseProvider>(database: &DB, student_email: &str) -> AppResult<()> {
    let existing = database
        .get_student_by_email(student_email)
        .await
        .map_err(|e| AppError::database(format!("student lookup failed: {e}")))?;

    if existing.is_none() {
        return Err(AppError::not_found(format!("student {student_email}")));
    }

    let student = database
        .suspend_student(student_email, Utc::now())
        .await
        .map_err(|e| AppError::database(format!("suspension failed: {e}")))?;

    info!(
        student = %student.email,
        suspended_at = ?student.date_suspended,
        "student suspended"
    );

    Ok(())
}
