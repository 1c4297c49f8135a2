use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    services::working_days,
    types::{LeaveRequestId, UserId},
    validation::Validate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    Daily,
    Sick,
    Hajj,
    Marriage,
    Study,
    Motherhood,
    Birth,
}

impl LeaveCategory {
    pub const ALL: [LeaveCategory; 7] = [
        LeaveCategory::Daily,
        LeaveCategory::Sick,
        LeaveCategory::Hajj,
        LeaveCategory::Marriage,
        LeaveCategory::Study,
        LeaveCategory::Motherhood,
        LeaveCategory::Birth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveCategory::Daily => "daily",
            LeaveCategory::Sick => "sick",
            LeaveCategory::Hajj => "hajj",
            LeaveCategory::Marriage => "marriage",
            LeaveCategory::Study => "study",
            LeaveCategory::Motherhood => "motherhood",
            LeaveCategory::Birth => "birth",
        }
    }

    /// Categories whose end date is derived from a working-day entitlement
    /// instead of being entered.
    pub fn is_fixed_duration(&self) -> bool {
        matches!(
            self,
            LeaveCategory::Marriage | LeaveCategory::Motherhood | LeaveCategory::Birth
        )
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown leave category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown request status: {}", other)),
        }
    }
}

/// An ordered pair of calendar dates. A span with `start > end` is inverted
/// and holds zero working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LeaveSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn working_days(&self) -> u32 {
        working_days::count_working_days(self.start, self.end)
    }

    pub fn exceeds_study_leave_limit(&self) -> bool {
        working_days::exceeds_study_leave_limit(self.start, self.end)
    }
}

/// Validated submission forwarded to the leave request endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateLeaveRequest {
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl CreateLeaveRequest {
    pub fn span(&self) -> LeaveSpan {
        LeaveSpan::new(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub employee_id: UserId,
    pub employee_name: String,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days: u32,
    pub note: Option<String>,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub processed_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    pub fn new(employee_id: UserId, employee_name: String, payload: CreateLeaveRequest) -> Self {
        Self {
            id: LeaveRequestId::new(),
            employee_id,
            employee_name,
            category: payload.category,
            start_date: payload.start_date,
            end_date: payload.end_date,
            working_days: payload.working_days,
            note: payload.note,
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
            processed_at: None,
            processed_by: None,
            rejection_reason: None,
        }
    }

    pub fn approve(&mut self, processed_by: String) {
        self.status = RequestStatus::Approved;
        self.processed_by = Some(processed_by);
        self.processed_at = Some(Utc::now());
    }

    pub fn reject(&mut self, processed_by: String, reason: String) {
        self.status = RequestStatus::Rejected;
        self.processed_by = Some(processed_by);
        self.processed_at = Some(Utc::now());
        self.rejection_reason = Some(reason);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }

    pub fn span(&self) -> LeaveSpan {
        LeaveSpan::new(self.start_date, self.end_date)
    }
}
