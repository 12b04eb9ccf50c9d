pub mod job;
pub mod preferences;
pub mod status;

pub use crate::types::identifiers::JobId;
pub use job::{Job, WorkMode};
pub use preferences::{split_tokens, MinMatchScore, Preferences};
pub use status::{ApplicationStatus, Status};
