use async_trait::async_trait;

use crate::domain::commit::CommitRecord;
use crate::error::FetchError;

/// Page size requested from commit-listing endpoints.
pub const PAGE_SIZE: u32 = 100;

#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Repository identifier, `owner/name`.
    fn repository(&self) -> &str;

    /// Fetches one page of commits. Pages are 1-based; an empty page marks the end.
    async fn fetch_page(&self, page: u32) -> Result<Vec<CommitRecord>, FetchError>;
}
