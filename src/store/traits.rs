use crate::model::{GuitarListItem, GuitarRecord, Id, MediaItem, SpecEntry};
use crate::seed::SeedRow;
use anyhow::Result;

/// Row insertion capability used by seed ingestion.
#[async_trait::async_trait]
pub trait SeedWriter: Send + Sync {
    async fn insert_row(&self, row: SeedRow) -> Result<()>;
}

/// Read-only queries behind the HTTP API.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All guitars with brand name and first media url, ordered by name
    async fn list_guitars(&self) -> Result<Vec<GuitarListItem>>;
    async fn get_guitar_by_slug(&self, slug: &str) -> Result<Option<GuitarRecord>>;
    /// Spec values of a guitar rendered as text, ordered by spec code
    async fn get_guitar_specs(&self, guitar_id: &Id) -> Result<Vec<SpecEntry>>;
    async fn get_guitar_media(&self, guitar_id: &Id) -> Result<Vec<MediaItem>>;
}
