//! Leave calculations and the workflows built on them.

pub mod approval_queue;
pub mod leave_form;
pub mod leave_policy;
pub mod working_days;

pub use approval_queue::{ApprovalQueue, QueueSummary};
pub use leave_form::{LeaveForm, LeaveFormView};
pub use leave_policy::{DurationRule, LeavePolicy};
