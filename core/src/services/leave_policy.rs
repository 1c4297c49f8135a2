//! Per-category duration rules and the submission rule set.
//!
//! The fixed-duration entitlements are labor-law values handed in through
//! configuration; nothing here derives them.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DateField, LeaveError},
    models::{CreateLeaveRequest, LeaveCategory},
    services::working_days::{self, STUDY_LEAVE_LIMIT},
    validation::Validate,
};

pub const DEFAULT_MARRIAGE_DAYS: u32 = 14;
pub const DEFAULT_BIRTH_DAYS: u32 = 21;
pub const DEFAULT_MOTHERHOOD_DAYS: u32 = 51;

/// How the end date of a category is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationRule {
    /// Both dates are picked by the employee.
    FreeForm,
    /// The end date is derived from a working-day entitlement.
    Fixed(NonZeroU32),
    /// Both dates are picked, but spans over the study leave limit must be
    /// filed offline.
    Capped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    pub marriage_days: NonZeroU32,
    pub birth_days: NonZeroU32,
    pub motherhood_days: NonZeroU32,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            marriage_days: non_zero(DEFAULT_MARRIAGE_DAYS),
            birth_days: non_zero(DEFAULT_BIRTH_DAYS),
            motherhood_days: non_zero(DEFAULT_MOTHERHOOD_DAYS),
        }
    }
}

impl LeavePolicy {
    pub fn rule_for(&self, category: LeaveCategory) -> DurationRule {
        match category {
            LeaveCategory::Marriage => DurationRule::Fixed(self.marriage_days),
            LeaveCategory::Birth => DurationRule::Fixed(self.birth_days),
            LeaveCategory::Motherhood => DurationRule::Fixed(self.motherhood_days),
            LeaveCategory::Study => DurationRule::Capped,
            LeaveCategory::Daily | LeaveCategory::Sick | LeaveCategory::Hajj => {
                DurationRule::FreeForm
            }
        }
    }

    pub fn fixed_duration(&self, category: LeaveCategory) -> Option<NonZeroU32> {
        match self.rule_for(category) {
            DurationRule::Fixed(days) => Some(days),
            DurationRule::FreeForm | DurationRule::Capped => None,
        }
    }

    /// End date for fixed-duration categories; `None` when the employee picks it.
    pub fn derive_end_date(&self, category: LeaveCategory, start: NaiveDate) -> Option<NaiveDate> {
        self.fixed_duration(category)
            .map(|days| working_days::resolve_end_date(start, days))
    }

    /// True when the span must be filed offline instead of submitted here.
    pub fn requires_offline_filing(
        &self,
        category: LeaveCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> bool {
        match self.rule_for(category) {
            DurationRule::Capped => working_days::exceeds_study_leave_limit(start, end),
            DurationRule::FreeForm | DurationRule::Fixed(_) => false,
        }
    }

    /// Applies every submission rule to a payload, whoever built it, and
    /// returns it with the working-day count recomputed.
    ///
    /// Rules, in order: rest-day start, derived end for fixed categories or
    /// rest-day end otherwise, non-empty span, study leave limit, note.
    pub fn check_submission(
        &self,
        mut payload: CreateLeaveRequest,
    ) -> Result<CreateLeaveRequest, LeaveError> {
        let (start, end) = (payload.start_date, payload.end_date);
        reject_weekend(start, DateField::Start)?;

        match self.derive_end_date(payload.category, start) {
            Some(expected) if expected != end => {
                return Err(LeaveError::EndDateMismatch {
                    expected,
                    actual: end,
                });
            }
            Some(_) => {}
            None => reject_weekend(end, DateField::End)?,
        }

        let working_days = working_days::count_working_days(start, end);
        if working_days == 0 {
            return Err(LeaveError::InvertedRange { start, end });
        }

        if self.requires_offline_filing(payload.category, start, end) {
            return Err(LeaveError::StudyLeaveLimitExceeded {
                working_days,
                limit: STUDY_LEAVE_LIMIT,
            });
        }

        payload.validate()?;
        payload.working_days = working_days;
        Ok(payload)
    }
}

fn reject_weekend(date: NaiveDate, field: DateField) -> Result<(), LeaveError> {
    if working_days::is_weekend(date) {
        Err(LeaveError::WeekendDate { field, date })
    } else {
        Ok(())
    }
}

fn non_zero(days: u32) -> NonZeroU32 {
    NonZeroU32::new(days).unwrap_or(NonZeroU32::MIN)
}
