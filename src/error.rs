use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures while provisioning the player and schedule tables
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("data file not found (tried: {})", display_paths(.tried))]
    MissingFile { tried: Vec<PathBuf> },

    #[error("validation error: {0}")]
    Validation(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Request errors surfaced to API callers as `{"error": ...}`
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Date parameter is required")]
    MissingDate,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingDate | ApiError::InvalidDate(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
