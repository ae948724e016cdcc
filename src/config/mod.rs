// ABOUTME: Configuration module organization for the Rollcall server
// ABOUTME: Environment-driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Environment-based configuration management
pub mod environment;
