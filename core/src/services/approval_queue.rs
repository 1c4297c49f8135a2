//! In-memory review queue for submitted leave requests.
//!
//! Holds one session's worth of requests; storing them is the backend's job.

use serde::Serialize;

use crate::{
    error::LeaveError,
    models::{CreateLeaveRequest, LeaveRequest, RequestStatus, Session},
    services::leave_policy::LeavePolicy,
    types::{LeaveRequestId, UserId},
    validation::rules::validate_rejection_reason,
};

/// Request counts shown on the review dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Default)]
pub struct ApprovalQueue {
    policy: LeavePolicy,
    requests: Vec<LeaveRequest>,
    /// Decided request ids in the order the decisions were made.
    decisions: Vec<LeaveRequestId>,
}

impl ApprovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LeavePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Queues a request after re-applying the submission rules; the stored
    /// working-day count is always recomputed from the dates.
    pub fn submit(
        &mut self,
        session: &Session,
        payload: CreateLeaveRequest,
    ) -> Result<&LeaveRequest, LeaveError> {
        let category = payload.category;
        let payload = self.policy.check_submission(payload).map_err(|err| {
            tracing::warn!(
                employee_id = %session.user_id,
                category = %category,
                code = err.code(),
                error = %err,
                "leave request rejected at submission"
            );
            err
        })?;

        let request = LeaveRequest::new(session.user_id, session.display_name.clone(), payload);
        tracing::info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            category = %request.category,
            working_days = request.working_days,
            "leave request submitted"
        );
        self.requests.push(request);
        let last = self.requests.len() - 1;
        Ok(&self.requests[last])
    }

    pub fn get(&self, id: LeaveRequestId) -> Option<&LeaveRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    pub fn approve(
        &mut self,
        session: &Session,
        id: LeaveRequestId,
    ) -> Result<&LeaveRequest, LeaveError> {
        let request = pending_mut(&mut self.requests, session, id)?;
        request.approve(session.display_name.clone());
        self.decisions.push(id);
        tracing::info!(request_id = %id, reviewer = %session.user_id, "leave request approved");
        Ok(&*request)
    }

    pub fn reject(
        &mut self,
        session: &Session,
        id: LeaveRequestId,
        reason: &str,
    ) -> Result<&LeaveRequest, LeaveError> {
        validate_rejection_reason(reason).map_err(|err| {
            if err.code == "rejection_reason_required" {
                LeaveError::RejectionReasonRequired
            } else {
                LeaveError::Validation(vec![format!("reason: {}", err.code)])
            }
        })?;
        let request = pending_mut(&mut self.requests, session, id)?;
        request.reject(session.display_name.clone(), reason.trim().to_string());
        self.decisions.push(id);
        tracing::info!(request_id = %id, reviewer = %session.user_id, "leave request rejected");
        Ok(&*request)
    }

    /// Requests awaiting a decision, oldest first.
    pub fn pending(&self) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| request.is_pending())
            .collect()
    }

    /// Decided requests, most recently decided first. Decisions made within
    /// the same clock tick keep the order they were made in.
    pub fn processed(&self) -> Vec<&LeaveRequest> {
        self.decisions
            .iter()
            .rev()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Requests with the given status, or all of them for `None`.
    pub fn filter(&self, status: Option<RequestStatus>) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| status.map_or(true, |status| request.status == status))
            .collect()
    }

    pub fn for_employee(&self, employee_id: UserId) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| request.employee_id == employee_id)
            .collect()
    }

    pub fn summary(&self) -> QueueSummary {
        self.requests
            .iter()
            .fold(QueueSummary::default(), |mut summary, request| {
                match request.status {
                    RequestStatus::Pending => summary.pending += 1,
                    RequestStatus::Approved => summary.approved += 1,
                    RequestStatus::Rejected => summary.rejected += 1,
                }
                summary
            })
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

fn pending_mut<'a>(
    requests: &'a mut [LeaveRequest],
    session: &Session,
    id: LeaveRequestId,
) -> Result<&'a mut LeaveRequest, LeaveError> {
    if !session.is_admin {
        tracing::warn!(user_id = %session.user_id, request_id = %id, "non-admin review attempt");
        return Err(LeaveError::Forbidden(
            "only administrators can review leave requests".to_string(),
        ));
    }
    let request = requests
        .iter_mut()
        .find(|request| request.id == id)
        .ok_or(LeaveError::NotFound(id))?;
    if !request.is_pending() {
        return Err(LeaveError::AlreadyProcessed(id));
    }
    Ok(request)
}
