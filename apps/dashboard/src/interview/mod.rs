//! Interview practice: a multi-turn mock interview driven against /mock-interview.
//! The transcript is page-owned and never shared with other pages.

pub mod session;
pub mod transcript;

pub use session::{InterviewSession, SessionState};
pub use transcript::Transcript;
