// ABOUTME: Route module organization for Rollcall HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the Rollcall server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the service layer.

/// Health check and system status routes
pub mod health;
/// Notification recipient resolution routes
pub mod notifications;
/// Roster routes: registration, common students, suspension
pub mod roster;

/// Health check route handlers
pub use health::HealthRoutes;
/// Notification route handlers
pub use notifications::NotificationRoutes;
/// Roster route handlers
pub use roster::RosterRoutes;
