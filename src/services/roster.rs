// ABOUTME: Roster query service - students paired with a set of teachers
// ABOUTME: Set-membership match over pairs, preserving retrieval order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};

/// Split a comma-delimited teacher list into individual emails.
///
/// No trimming or filtering: an empty input yields a single empty entry,
/// which matches no pairs.
#[must_use]
pub fn split_teacher_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_owned).collect()
}

/// Look up the students paired with the given teachers.
///
/// Matches every pair whose teacher email is a member of `teacher_emails`
/// and projects the student email, in retrieval order. Note this is a
/// membership match, not an intersection: a student appears once per
/// matching pair, so teachers with overlapping rosters produce repeated
/// emails. Lookup is case-sensitive on the stored email key.
///
/// # Errors
///
/// Returns a database error if the pair lookup fails.
pub async fn common_students<DB: DatabaseProvider>(
    database: &DB,
    teacher_emails: &[String],
) -> AppResult<Vec<String>> {
    let pairs = database
        .get_pairs_for_teachers(teacher_emails)
        .await
        .map_err(|e| AppError::database(format!("pair lookup failed: {e}")))?;

    Ok(pairs.into_iter().map(|pair| pair.student_email).collect())
}
