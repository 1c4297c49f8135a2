//! Data models shared by the form layer and the approval queue.

pub mod leave_request;
pub mod session;

pub use leave_request::{CreateLeaveRequest, LeaveCategory, LeaveRequest, LeaveSpan, RequestStatus};
pub use session::Session;
