// ABOUTME: Notification route handlers for recipient resolution
// ABOUTME: Thin axum handler delegating to the notification resolver service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Notification routes
//!
//! Resolves the final recipient list for a teacher's notification from
//! inline mentions and the teacher's registered students.

use crate::{context::ServerResources, errors::AppError, services::notifications};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for recipient resolution
#[derive(Debug, Deserialize)]
pub struct RetrieveForNotificationsRequest {
    /// Email of the sending teacher
    pub teacher: Option<String>,
    /// Free-text notification body, possibly containing `@`-mentions
    pub notification: Option<String>,
}

/// Response carrying the resolved recipients
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipientsResponse {
    /// Emails of the students who will receive the notification
    pub recipients: Vec<String>,
}

/// Notification routes implementation
pub struct NotificationRoutes;

impl NotificationRoutes {
    /// Create all notification routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/retrievefornotifications",
                post(Self::handle_retrieve_for_notifications),
            )
            .with_state(resources)
    }

    /// Handle recipient resolution for a notification
    async fn handle_retrieve_for_notifications(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RetrieveForNotificationsRequest>,
    ) -> Result<Response, AppError> {
        let teacher = request.teacher.unwrap_or_default();
        let notification = request.notification.unwrap_or_default();

        let recipients = notifications::resolve_recipients(
            resources.database.as_ref(),
            &teacher,
            &notification,
        )
        .await?;

        Ok((StatusCode::OK, Json(RecipientsResponse { recipients })).into_response())
    }
}
