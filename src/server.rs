// ABOUTME: HTTP server assembly - router construction, middleware layers, and serving
// ABOUTME: Nests the API routes under /api and binds the TCP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP server assembly and lifecycle

use crate::context::ServerResources;
use crate::routes::{HealthRoutes, NotificationRoutes, RosterRoutes};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The Rollcall HTTP server
pub struct RollcallServer {
    resources: Arc<ServerResources>,
}

impl RollcallServer {
    /// Create a new server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// API endpoints live under `/api`; health endpoints are top-level so
    /// load balancers reach them without the prefix.
    #[must_use]
    pub fn router(&self) -> Router {
        let api = RosterRoutes::routes(self.resources.clone())
            .merge(NotificationRoutes::routes(self.resources.clone()));

        Router::new()
            .nest("/api", api)
            .merge(HealthRoutes::routes())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind the port and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve on the port
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("HTTP server listening on {}", addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
