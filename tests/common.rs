// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, resource, and router builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared test utilities for `rollcall`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use axum::Router;
use rollcall::{
    config::environment::ServerConfig,
    context::ServerResources,
    database_plugins::{factory::Database, DatabaseProvider},
    server::RollcallServer,
    services::registration,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory fake backend)
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("memory://").await?);
    Ok(database)
}

/// SQLite-backed test database in a temporary directory
///
/// Returns the tempdir guard alongside the database; dropping the guard
/// deletes the file.
pub async fn create_sqlite_test_database() -> Result<(tempfile::TempDir, Arc<Database>)> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite:{}", dir.path().join("rollcall-test.db").display());
    let database = Arc::new(Database::new(&url).await?);
    Ok((dir, database))
}

/// Create test `ServerResources` backed by the in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = Database::new("memory://").await?;
    let config = Arc::new(ServerConfig::default());
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Build the full application router over fresh in-memory resources
///
/// Returns the router together with the resources so tests can seed data
/// through the service layer.
pub async fn build_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    let app = RollcallServer::new(resources.clone()).router();
    Ok((app, resources))
}

/// Register a teacher with students through the service layer
pub async fn register_students(
    database: &Database,
    teacher: &str,
    students: &[&str],
) -> Result<()> {
    let students: Vec<String> = students.iter().map(|s| (*s).to_owned()).collect();
    registration::register(database, teacher, &students).await?;
    Ok(())
}
