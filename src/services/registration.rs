// ABOUTME: Registration service - links students to a teacher via idempotent upserts
// ABOUTME: Dispatches teacher, student, and pair upserts concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use futures_util::future::try_join_all;
use tracing::debug;

/// Register a list of students under a teacher.
///
/// Ensures a `Teacher` record for `teacher_email`, a `Student` record per
/// non-empty entry of `student_emails`, and a `Pair` per
/// `(teacher, student)` combination, all as idempotent upserts. The pair is
/// keyed on the composite, never on the student email alone, so a student
/// registered under several teachers keeps every link.
///
/// The upserts are dispatched concurrently and awaited together. There is
/// no transaction boundary: a failure surfaces as an error without rolling
/// back upserts that already landed, and concurrent registrations for the
/// same key rely on the store's unique constraints.
///
/// # Errors
///
/// Returns `MissingRequiredField` if `teacher_email` is empty, or a
/// database error if any upsert fails.
pub async fn register<DB: DatabaseProvider>(
    database: &DB,
    teacher_email: &str,
    student_emails: &[String],
) -> AppResult<()> {
    if teacher_email.trim().is_empty() {
        return Err(AppError::missing_field("teacher"));
    }

    // Drop empty entries before processing; malformed payloads routinely
    // contain them.
    let students: Vec<&str> = student_emails
        .iter()
        .map(String::as_str)
        .filter(|email| !email.trim().is_empty())
        .collect();

    let teacher_upsert = database.upsert_teacher(teacher_email);
    let student_upserts = try_join_all(
        students
            .iter()
            .map(|email| database.upsert_student(email)),
    );
    let pair_upserts = try_join_all(
        students
            .iter()
            .map(|email| database.upsert_pair(teacher_email, email)),
    );

    let (teacher, student_outcomes, pair_outcomes) =
        tokio::try_join!(teacher_upsert, student_upserts, pair_upserts)
            .map_err(|e| AppError::database(format!("registration failed: {e}")))?;

    debug!(
        teacher = %teacher.record.email,
        teacher_created = teacher.created,
        students = student_outcomes.len(),
        pairs_created = pair_outcomes.iter().filter(|o| o.created).count(),
        "registration complete"
    );

    Ok(())
}
