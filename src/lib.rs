// ABOUTME: Main library entry point for the Rollcall classroom administration backend
// ABOUTME: Provides roster registration, suspension, and notification recipient resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Rollcall
//!
//! An administrative backend for a classroom notification service. Teachers
//! register students, query the students paired with a set of teachers,
//! suspend students, and resolve the recipients of a notification from
//! inline `@`-mentions.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: Typed records for teachers, students, and teacher-student pairs
//! - **Database plugins**: Storage abstraction with SQLite and in-memory backends
//! - **Services**: Protocol-agnostic business logic (registration, roster
//!   queries, suspension, notification resolution)
//! - **Routes**: Thin axum HTTP handlers delegating to the service layer
//! - **Config**: Environment-driven configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rollcall::config::environment::ServerConfig;
//! use rollcall::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!(
//!         "Rollcall configured with port: HTTP={}",
//!         config.http_port
//!     );
//!
//!     Ok(())
//! }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// Shared resource container for dependency injection
pub mod context;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models for roster records
pub mod models;

/// HTTP routes for registration, roster queries, and notifications
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Domain service layer for transport-agnostic business logic
pub mod services;
