use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::errors::AppError;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Uniform response body: `{status, results?, data?, message?}`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    fn with_status(status: Status) -> Self {
        Self {
            status,
            results: None,
            data: None,
            message: None,
        }
    }

    pub fn success() -> Self {
        Self::with_status(Status::Success)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(Status::Fail).message(message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(Status::Error).message(message)
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn results(mut self, results: usize) -> Self {
        self.results = Some(results);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub fn error_status(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Io(_) | AppError::Json(_) | AppError::Config(_) | AppError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_status(&self);

        if self.is_client_error() {
            return Envelope::fail(self.to_string()).respond(status);
        }

        error!(error = %self, "request failed");
        Envelope::error(GENERIC_ERROR_MESSAGE).respond(status)
    }
}
