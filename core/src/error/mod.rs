use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::types::LeaveRequestId;

/// Which date input of the leave form an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => f.write_str("start date"),
            DateField::End => f.write_str("end date"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("{field} is required")]
    MissingDate { field: DateField },
    #[error("{field} must use the YYYY-MM-DD format, got {value:?}")]
    InvalidDate { field: DateField, value: String },
    #[error("{field} {date} falls on a weekly rest day")]
    WeekendDate { field: DateField, date: NaiveDate },
    #[error("end date {end} must be on or after start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
    #[error("end date {actual} does not match the entitlement, expected {expected}")]
    EndDateMismatch { expected: NaiveDate, actual: NaiveDate },
    #[error("study leave of {working_days} working days exceeds the {limit}-day limit and must be filed with the administration")]
    StudyLeaveLimitExceeded { working_days: u32, limit: u32 },
    #[error("a rejection reason is required")]
    RejectionReasonRequired,
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("leave request {0} not found")]
    NotFound(LeaveRequestId),
    #[error("leave request {0} has already been processed")]
    AlreadyProcessed(LeaveRequestId),
    #[error("{0}")]
    Forbidden(String),
}

/// Machine-readable body handed to whatever renders the error.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<DateField>,
}

impl LeaveError {
    pub fn code(&self) -> &'static str {
        match self {
            LeaveError::MissingDate { .. } => "MISSING_DATE",
            LeaveError::InvalidDate { .. } => "INVALID_DATE",
            LeaveError::WeekendDate { .. } => "WEEKEND_DATE",
            LeaveError::InvertedRange { .. } => "INVERTED_RANGE",
            LeaveError::EndDateMismatch { .. } => "END_DATE_MISMATCH",
            LeaveError::StudyLeaveLimitExceeded { .. } => "OFFLINE_FILING_REQUIRED",
            LeaveError::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            LeaveError::Validation(_) => "VALIDATION_ERROR",
            LeaveError::NotFound(_) => "NOT_FOUND",
            LeaveError::AlreadyProcessed(_) => "CONFLICT",
            LeaveError::Forbidden(_) => "FORBIDDEN",
        }
    }

    pub fn field(&self) -> Option<DateField> {
        match self {
            LeaveError::MissingDate { field }
            | LeaveError::InvalidDate { field, .. }
            | LeaveError::WeekendDate { field, .. } => Some(*field),
            LeaveError::InvertedRange { .. } | LeaveError::EndDateMismatch { .. } => {
                Some(DateField::End)
            }
            _ => None,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            field: self.field(),
        }
    }
}

impl From<validator::ValidationErrors> for LeaveError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.as_ref();
                    format!("{}: {}", field, code)
                })
            })
            .collect();
        messages.sort();
        LeaveError::Validation(messages)
    }
}
