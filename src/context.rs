// ABOUTME: Centralized resource container for dependency injection in route handlers
// ABOUTME: Holds the shared database handle and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Route handlers
//! receive an `Arc<ServerResources>` as axum state instead of threading the
//! database and configuration through individually.

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Shared database handle
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create a new resource container
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}
