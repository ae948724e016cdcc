// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Transport-agnostic operations over the roster store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! This module contains transport-agnostic business logic extracted from the
//! route handlers. Each service is a set of free functions generic over the
//! [`DatabaseProvider`](crate::database_plugins::DatabaseProvider) store
//! abstraction, so tests can inject the in-memory backend.

/// Notification recipient resolution: mention parsing, candidate union,
/// suspension filtering
pub mod notifications;

/// Roster registration: teacher/student/pair upserts
pub mod registration;

/// Roster queries: students paired with a set of teachers
pub mod roster;

/// Student suspension
pub mod suspension;
