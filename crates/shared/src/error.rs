use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MemberId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    FetchFailed,
    NotFound,
    InvalidPage,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("failed to fetch members: {0}")]
    FetchFailed(String),
    #[error("member {0} not found")]
    NotFound(MemberId),
    #[error("member {0} is not being edited")]
    NotEditing(MemberId),
    #[error("page {requested} is outside 1..={total_pages}")]
    InvalidPage { requested: usize, total_pages: usize },
    #[error("unknown editable field '{0}'")]
    UnknownField(String),
}

impl ControllerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FetchFailed(_) => ErrorCode::FetchFailed,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::NotEditing(_) => ErrorCode::Validation,
            Self::InvalidPage { .. } => ErrorCode::InvalidPage,
            Self::UnknownField(_) => ErrorCode::Validation,
        }
    }
}

/// Renderer-facing form of a [`ControllerError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ControllerError> for ErrorReport {
    fn from(value: &ControllerError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<ControllerError> for ErrorReport {
    fn from(value: ControllerError) -> Self {
        Self::from(&value)
    }
}
