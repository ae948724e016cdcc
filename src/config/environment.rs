// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, ports, database URLs, and log levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default HTTP port when `HTTP_PORT` is not set
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default database location when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/rollcall.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// Process-local in-memory store (ephemeral, for tests and local runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is not recognized
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if let Some(path) = s.strip_prefix("sqlite:") {
            Ok(Self::SQLite {
                path: PathBuf::from(path),
            })
        } else if s.starts_with("memory:") {
            Ok(Self::Memory)
        } else {
            Err(AppError::config(format!(
                "Unsupported DATABASE_URL: {s}. Expected sqlite:<path> or memory://"
            )))
        }
    }

    /// Render back to a connection string for the database factory
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "memory://".to_owned(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (SQLite path or in-memory scheme)
    pub url: DatabaseUrl,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Database configuration
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            log_level: LogLevel::Info,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HTTP_PORT`, `DATABASE_URL`, `LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port number or
    /// `DATABASE_URL` has an unsupported scheme.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT {raw}: {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let log_level = env::var("LOG_LEVEL")
            .map(|raw| LogLevel::from_str_or_default(&raw))
            .unwrap_or_default();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        Ok(Self {
            http_port,
            log_level,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&database_url)?,
            },
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} log_level={} database={}",
            self.http_port,
            self.log_level,
            self.database.url.to_connection_string()
        )
    }
}
