//! Leave-request details beyond dates: leave type and stated reason.
//!
//! Both are plain lexical lookups over the message text.

mod reason;
mod types;

pub use reason::extract_reason;
pub use types::{extract_leave_type, LeaveType, LEAVE_KEYWORDS};
