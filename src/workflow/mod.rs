pub mod feedback_flow;
pub mod session_ctx;

pub use feedback_flow::{FeedbackFlow, SessionPhase};
pub use session_ctx::SessionCtx;
