// ABOUTME: Integration tests for the common-students roster query
// ABOUTME: Pins the membership-match (union) semantics and case-sensitive keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_database, register_students};
use rollcall::services::roster;

#[tokio::test]
async fn test_single_teacher_returns_registered_students() {
    let database = create_test_database().await.expect("database");
    register_students(
        &database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("registration");

    let students =
        roster::common_students(database.as_ref(), &["teacherken@gmail.com".to_owned()])
            .await
            .expect("query");

    let mut sorted = students;
    sorted.sort();
    assert_eq!(
        sorted,
        vec![
            "studenthon@gmail.com".to_owned(),
            "studentjon@gmail.com".to_owned()
        ]
    );
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let database = create_test_database().await.expect("database");
    register_students(
        &database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("registration");

    // Wrong-case key matches nothing.
    let students =
        roster::common_students(database.as_ref(), &["teacherKen@gmail.com".to_owned()])
            .await
            .expect("query");
    assert!(students.is_empty());
}

#[tokio::test]
async fn test_multiple_teachers_return_students_of_any() {
    let database = create_test_database().await.expect("database");
    register_students(
        &database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("registration");
    register_students(
        &database,
        "mary@gmail.com",
        &["aaa@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("registration");

    // Membership match, not intersection: one entry per matching pair, so
    // the shared student shows up once per teacher.
    let mut students = roster::common_students(
        database.as_ref(),
        &["teacherken@gmail.com".to_owned(), "mary@gmail.com".to_owned()],
    )
    .await
    .expect("query");
    students.sort();

    assert_eq!(
        students,
        vec![
            "aaa@gmail.com".to_owned(),
            "studenthon@gmail.com".to_owned(),
            "studenthon@gmail.com".to_owned(),
            "studentjon@gmail.com".to_owned(),
        ]
    );
}

#[tokio::test]
async fn test_unknown_teacher_returns_empty() {
    let database = create_test_database().await.expect("database");

    let students =
        roster::common_students(database.as_ref(), &["nobody@gmail.com".to_owned()])
            .await
            .expect("query");
    assert!(students.is_empty());
}

#[tokio::test]
async fn test_empty_teacher_list_input() {
    let database = create_test_database().await.expect("database");
    register_students(&database, "teacherken@gmail.com", &["studentjon@gmail.com"])
        .await
        .expect("registration");

    // An empty query string splits into a single empty email, which
    // matches no pairs.
    let teachers = roster::split_teacher_list("");
    let students = roster::common_students(database.as_ref(), &teachers)
        .await
        .expect("query");
    assert!(students.is_empty());
}
