//! Leave submission form state.
//!
//! The form is re-evaluated on every input change, so [`LeaveForm::evaluate`]
//! never fails; [`LeaveForm::to_payload`] applies the full rule set once the
//! employee submits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DateField, LeaveError},
    models::{CreateLeaveRequest, LeaveCategory},
    services::{
        leave_policy::{DurationRule, LeavePolicy},
        working_days,
    },
    utils::time::parse_iso_date,
    validation::rules::optional_text,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveForm {
    pub category: LeaveCategory,
    pub start_date: String,
    pub end_date: String,
    pub note: String,
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self::new(LeaveCategory::Daily)
    }
}

/// What the form shows after an input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveFormView {
    /// False for fixed-duration categories, whose end date is derived.
    pub end_date_editable: bool,
    pub derived_end_date: Option<NaiveDate>,
    /// Working days in the current span, once both dates are known.
    pub working_days: Option<u32>,
    /// Study leave above the limit: hide the date inputs and show the
    /// offline filing instructions instead.
    pub offline_filing_required: bool,
}

impl LeaveForm {
    pub fn new(category: LeaveCategory) -> Self {
        Self {
            category,
            start_date: String::new(),
            end_date: String::new(),
            note: String::new(),
        }
    }

    /// Switches category. A typed end date is discarded when the new
    /// category derives its own.
    pub fn set_category(&mut self, category: LeaveCategory) {
        self.category = category;
        if category.is_fixed_duration() {
            self.end_date.clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.category);
    }

    pub fn evaluate(&self, policy: &LeavePolicy) -> LeaveFormView {
        let start = parse_iso_date(&self.start_date);
        let derived_end_date = start.and_then(|start| policy.derive_end_date(self.category, start));
        let end = match policy.rule_for(self.category) {
            DurationRule::Fixed(_) => derived_end_date,
            DurationRule::FreeForm | DurationRule::Capped => parse_iso_date(&self.end_date),
        };

        let span = start.zip(end);
        let working_days = span.map(|(start, end)| working_days::count_working_days(start, end));
        let offline_filing_required = span.is_some_and(|(start, end)| {
            policy.requires_offline_filing(self.category, start, end)
        });

        let view = LeaveFormView {
            end_date_editable: !self.category.is_fixed_duration(),
            derived_end_date,
            working_days,
            offline_filing_required,
        };
        tracing::debug!(
            category = %self.category,
            working_days = ?view.working_days,
            offline_filing_required = view.offline_filing_required,
            "evaluated leave form"
        );
        view
    }

    pub fn to_payload(&self, policy: &LeavePolicy) -> Result<CreateLeaveRequest, LeaveError> {
        let result = self.build_payload(policy);
        if let Err(err) = &result {
            tracing::warn!(
                category = %self.category,
                code = err.code(),
                error = %err,
                "leave form rejected"
            );
        }
        result
    }

    fn build_payload(&self, policy: &LeavePolicy) -> Result<CreateLeaveRequest, LeaveError> {
        let start = required_date(&self.start_date, DateField::Start)?;
        let end = match policy.derive_end_date(self.category, start) {
            Some(derived) => derived,
            None => required_date(&self.end_date, DateField::End)?,
        };

        policy.check_submission(CreateLeaveRequest {
            category: self.category,
            start_date: start,
            end_date: end,
            working_days: 0,
            note: optional_text(&self.note),
        })
    }
}

fn required_date(input: &str, field: DateField) -> Result<NaiveDate, LeaveError> {
    if input.trim().is_empty() {
        return Err(LeaveError::MissingDate { field });
    }
    parse_iso_date(input).ok_or_else(|| LeaveError::InvalidDate {
        field,
        value: input.to_string(),
    })
}
