pub mod config;
pub mod history;
pub mod manager;
pub mod record;
pub mod render;

use thiserror::Error;

use crate::store::StoreError;

pub use config::DigestConfig;
pub use history::{recent_status_updates, StatusUpdate};
pub use manager::DigestManager;
pub use record::{DigestRecord, DigestView};
pub use render::render_plain_text;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
