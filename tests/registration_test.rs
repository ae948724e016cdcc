// ABOUTME: Integration tests for the registration service
// ABOUTME: Covers idempotent upserts, composite pair keys, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_database, register_students};
use rollcall::database_plugins::DatabaseProvider;
use rollcall::errors::ErrorCode;
use rollcall::services::registration;

#[tokio::test]
async fn test_register_creates_teacher_students_and_pairs() {
    let database = create_test_database().await.expect("database");

    register_students(
        &database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("registration succeeds");

    let teacher = database
        .get_teacher_by_email("teacherken@gmail.com")
        .await
        .expect("lookup");
    assert!(teacher.is_some());

    for email in ["studentjon@gmail.com", "studenthon@gmail.com"] {
        let student = database.get_student_by_email(email).await.expect("lookup");
        assert!(student.is_some(), "student {email} should exist");
        assert!(!student.unwrap().is_suspended());
    }

    let pairs = database
        .get_pairs_for_teachers(&["teacherken@gmail.com".to_owned()])
        .await
        .expect("lookup");
    assert_eq!(pairs.len(), 2);
}

#[tokio::test]
async fn test_register_twice_is_idempotent() {
    let database = create_test_database().await.expect("database");

    for _ in 0..2 {
        register_students(
            &database,
            "teacherken@gmail.com",
            &["studentjon@gmail.com", "studenthon@gmail.com"],
        )
        .await
        .expect("registration succeeds");
    }

    // Exactly one pair per unique (teacher, student) combination.
    let pairs = database
        .get_pairs_for_teachers(&["teacherken@gmail.com".to_owned()])
        .await
        .expect("lookup");
    assert_eq!(pairs.len(), 2);

    // The second upsert found the existing teacher rather than creating one.
    let outcome = database
        .upsert_teacher("teacherken@gmail.com")
        .await
        .expect("upsert");
    assert!(!outcome.created);
}

#[tokio::test]
async fn test_register_requires_teacher_email() {
    let database = create_test_database().await.expect("database");

    let error = registration::register(database.as_ref(), "", &["studentjon@gmail.com".to_owned()])
        .await
        .expect_err("empty teacher must fail");
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    // Nothing was written.
    let student = database
        .get_student_by_email("studentjon@gmail.com")
        .await
        .expect("lookup");
    assert!(student.is_none());
}

#[tokio::test]
async fn test_register_filters_blank_student_entries() {
    let database = create_test_database().await.expect("database");

    registration::register(
        database.as_ref(),
        "teacherken@gmail.com",
        &[
            "studentjon@gmail.com".to_owned(),
            String::new(),
            "   ".to_owned(),
        ],
    )
    .await
    .expect("registration succeeds");

    let pairs = database
        .get_pairs_for_teachers(&["teacherken@gmail.com".to_owned()])
        .await
        .expect("lookup");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].student_email, "studentjon@gmail.com");
}

#[tokio::test]
async fn test_register_student_under_multiple_teachers_keeps_both_pairs() {
    let database = create_test_database().await.expect("database");

    register_students(&database, "teacherken@gmail.com", &["studenthon@gmail.com"])
        .await
        .expect("first registration");
    register_students(&database, "mary@gmail.com", &["studenthon@gmail.com"])
        .await
        .expect("second registration");

    // Pairs are keyed on the (teacher, student) composite, so the second
    // registration must not overwrite the first teacher's link.
    let ken_pairs = database
        .get_pairs_for_teachers(&["teacherken@gmail.com".to_owned()])
        .await
        .expect("lookup");
    let mary_pairs = database
        .get_pairs_for_teachers(&["mary@gmail.com".to_owned()])
        .await
        .expect("lookup");
    assert_eq!(ken_pairs.len(), 1);
    assert_eq!(mary_pairs.len(), 1);

    // Only one student record exists underneath.
    let outcome = database
        .upsert_student("studenthon@gmail.com")
        .await
        .expect("upsert");
    assert!(!outcome.created);
}
