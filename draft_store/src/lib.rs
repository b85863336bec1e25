//! Where generated drafts go and where the history page reads them from.
//!
//! Two read sources exist: a fixed sample list and a remote storage endpoint.
//! Only the remote endpoint accepts writes.

mod pagination;
mod remote;
mod samples;
pub use pagination::{parse_page, HistoryPage, PAGE_SIZE};
pub use remote::{RemoteArchive, RemoteHistory};
pub use samples::SampleHistory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A draft as stored and listed: the three form fields plus the generated text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub details: Option<String>,
    pub draft: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("storage endpoint answered {status}")]
    Status { status: u16 },
}

#[async_trait]
pub trait HistorySource {
    async fn list(&self) -> Result<Vec<DraftRecord>, StoreError>;
}

#[async_trait]
pub trait DraftArchive {
    async fn save(&self, record: &DraftRecord) -> Result<(), StoreError>;
}
