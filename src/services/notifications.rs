// ABOUTME: Notification resolver - derives recipients from mentions and the roster
// ABOUTME: Naive " @" tokenizer, stable candidate union, suspension filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;
use tracing::debug;

/// Literal delimiter that introduces a mention: a space followed by `@`.
const MENTION_DELIMITER: &str = " @";

/// Extract mentioned emails from notification text.
///
/// The text is split on the literal `" @"` delimiter; every token after the
/// first that contains an `@` is taken as a mentioned email, verbatim. This
/// deliberately does not validate email syntax, and a mention at the very
/// start of the text (no leading space) is not detected. Known limitation,
/// kept for compatibility with existing notification payloads.
#[must_use]
pub fn extract_mentions(notification: &str) -> Vec<String> {
    notification
        .split(MENTION_DELIMITER)
        .skip(1)
        .filter(|token| token.contains('@'))
        .map(str::to_owned)
        .collect()
}

/// Resolve the recipients of a notification sent by a teacher.
///
/// Candidates are the mentioned emails followed by the teacher's registered
/// students, deduplicated by first occurrence. Of those, only students with
/// no suspension timestamp qualify; the result comes back in store-retrieval
/// order, which is not guaranteed to match candidate order.
///
/// # Errors
///
/// Returns a database error if the pair or student lookup fails.
pub async fn resolve_recipients<DB: DatabaseProvider>(
    database: &DB,
    teacher_email: &str,
    notification: &str,
) -> AppResult<Vec<String>> {
    let mentioned = extract_mentions(notification);

    let teacher_key = vec![teacher_email.to_owned()];
    let pairs = database
        .get_pairs_for_teachers(&teacher_key)
        .await
        .map_err(|e| AppError::database(format!("pair lookup failed: {e}")))?;
    let registered = pairs.into_iter().map(|pair| pair.student_email);

    // Mentioned-first union, first occurrence wins.
    let mut seen = HashSet::new();
    let candidates: Vec<String> = mentioned
        .into_iter()
        .chain(registered)
        .filter(|email| seen.insert(email.clone()))
        .collect();

    debug!(
        teacher = %teacher_email,
        candidates = candidates.len(),
        "resolving notification recipients"
    );

    let recipients = database
        .get_unsuspended_students(&candidates)
        .await
        .map_err(|e| AppError::database(format!("student lookup failed: {e}")))?;

    Ok(recipients
        .into_iter()
        .map(|student| student.email)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mentions_basic() {
        let mentions = extract_mentions("Hello students! @aaa@gmail.com @bbb@gmail.com");
        assert_eq!(
            mentions,
            vec!["aaa@gmail.com".to_owned(), "bbb@gmail.com".to_owned()]
        );
    }

    #[test]
    fn test_extract_mentions_ignores_tokens_without_at() {
        // " @everyone" splits off a token with no second @, so it is not an
        // email mention.
        let mentions = extract_mentions("Hey @everyone check in with @ccc@gmail.com");
        assert_eq!(mentions, vec!["ccc@gmail.com".to_owned()]);
    }

    #[test]
    fn test_extract_mentions_misses_mention_at_start() {
        // No leading space before the first @, so the delimiter never
        // matches and nothing is extracted.
        let mentions = extract_mentions("@aaa@gmail.com please reply");
        assert!(mentions.is_empty());
    }

    #[test]
    fn test_extract_mentions_empty_text() {
        assert!(extract_mentions("").is_empty());
        assert!(extract_mentions("no mentions here").is_empty());
    }
}
