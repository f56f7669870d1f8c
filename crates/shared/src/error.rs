use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidField,
    InvalidMenuItem,
    InvalidTimeRange,
    InvalidDirection,
}

/// Serializable form of a rejected call, handed to whatever renders errors.
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

/// Input validation failures. None of them leave state partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("unknown sort field '{field}'")]
    InvalidField { field: String },
    #[error("unknown menu item '{id}'")]
    InvalidMenuItem { id: String },
    #[error("unknown time range '{range}'")]
    InvalidTimeRange { range: String },
    #[error("unknown sort direction '{direction}'")]
    InvalidDirection { direction: String },
}

impl DashboardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidField { .. } => ErrorCode::InvalidField,
            Self::InvalidMenuItem { .. } => ErrorCode::InvalidMenuItem,
            Self::InvalidTimeRange { .. } => ErrorCode::InvalidTimeRange,
            Self::InvalidDirection { .. } => ErrorCode::InvalidDirection,
        }
    }
}

impl From<DashboardError> for ErrorReport {
    fn from(value: DashboardError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
