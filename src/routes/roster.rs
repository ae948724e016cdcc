// ABOUTME: Roster route handlers for registration, common-students queries, and suspension
// ABOUTME: Thin axum handlers delegating to the roster service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Roster management routes
//!
//! Registration, common-students lookup, and suspension endpoints. Request
//! fields are optional at the serde level so that missing values surface as
//! service-level validation errors rather than framework rejections.

use crate::{
    context::ServerResources,
    errors::AppError,
    services::{registration, roster, suspension},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for student registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email of the registering teacher
    pub teacher: Option<String>,
    /// Emails of the students to register
    #[serde(default)]
    pub students: Vec<String>,
}

/// Query parameters for the common-students lookup
#[derive(Debug, Deserialize)]
pub struct CommonStudentsParams {
    /// Comma-delimited teacher emails
    #[serde(default)]
    pub teachers: String,
}

/// Request body for student suspension
#[derive(Debug, Deserialize)]
pub struct SuspendRequest {
    /// Email of the student to suspend
    pub student: Option<String>,
}

/// Generic success/status message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome description
    pub message: String,
}

/// Response for the common-students lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct CommonStudentsResponse {
    /// Student emails paired with the given teachers
    pub students: Vec<String>,
    /// Outcome description
    pub message: String,
}

/// Roster routes implementation
pub struct RosterRoutes;

impl RosterRoutes {
    /// Create all roster management routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_welcome))
            .route("/register", post(Self::handle_register))
            .route("/commonstudents", get(Self::handle_common_students))
            .route("/suspend", post(Self::handle_suspend))
            .with_state(resources)
    }

    /// Handle the API index
    async fn handle_welcome() -> Json<MessageResponse> {
        Json(MessageResponse {
            message: "Welcome to Rollcall!".to_owned(),
        })
    }

    /// Handle student registration
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let teacher = request.teacher.unwrap_or_default();

        registration::register(resources.database.as_ref(), &teacher, &request.students).await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "success".to_owned(),
            }),
        )
            .into_response())
    }

    /// Handle the common-students lookup
    async fn handle_common_students(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CommonStudentsParams>,
    ) -> Result<Response, AppError> {
        let teacher_emails = roster::split_teacher_list(&params.teachers);

        let students =
            roster::common_students(resources.database.as_ref(), &teacher_emails).await?;

        Ok((
            StatusCode::OK,
            Json(CommonStudentsResponse {
                students,
                message: "success".to_owned(),
            }),
        )
            .into_response())
    }

    /// Handle student suspension
    async fn handle_suspend(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SuspendRequest>,
    ) -> Result<Response, AppError> {
        let student = request.student.unwrap_or_default();

        suspension::suspend(resources.database.as_ref(), &student).await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "success".to_owned(),
            }),
        )
            .into_response())
    }
}
