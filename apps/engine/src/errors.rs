use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-level error type. The embedding API layer maps `code()` to an
/// HTTP status; nothing in this crate raises past the public boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Prompt template not found: {0}")]
    TemplateNotFound(String),

    /// Soft condition: probability was requested with an empty match set.
    /// The facade degrades to weak-evidence defaults instead of
    /// surfacing this to callers.
    #[error("No success patterns available")]
    NoPatternsFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UserNotFound(_) => "USER_NOT_FOUND",
            EngineError::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            EngineError::NoPatternsFound => "NO_PATTERNS_FOUND",
            EngineError::Storage(_) => "STORAGE_ERROR",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Serialized error payload inside a `ServiceResponse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
}

/// Envelope returned by every public entry point. Callers decide HTTP
/// status mapping from `error.code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(err: EngineError) -> Self {
        match &err {
            EngineError::Storage(msg) => tracing::error!("storage failure: {msg}"),
            EngineError::Internal(e) => tracing::error!("internal failure: {e:?}"),
            _ => {}
        }
        Self {
            success: false,
            data: None,
            error: Some(ServiceError {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

impl<T> From<Result<T, EngineError>> for ServiceResponse<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(data) => ServiceResponse::ok(data),
            Err(err) => ServiceResponse::err(err),
        }
    }
}
