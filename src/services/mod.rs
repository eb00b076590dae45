pub mod submission_relay;

pub use submission_relay::{SubmissionRelay, SubmissionStats};
