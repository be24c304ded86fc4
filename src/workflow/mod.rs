pub mod player_form;
pub mod submission_status;

pub use player_form::{build_payload, PendingSubmission, PlayerForm};
pub use submission_status::SubmissionStatus;
