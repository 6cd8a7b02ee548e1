//! Site persistence
//!
//! The builder core does not own an HTTP client; it defines the persistence
//! seam as a trait and ships a local JSON-file implementation used by tests
//! and the desktop preview. Operations are fire-once request/response calls:
//! no retry, no backoff, no partial-failure recovery - a failed call
//! surfaces its error to the caller and nothing else happens.

pub mod file;

use async_trait::async_trait;
use thiserror::Error;

use crate::document::Site;

pub use file::JsonFileStore;

/// Persistence seam for sites.
///
/// A site must round-trip through `save` then `load` unchanged; the store
/// treats it as an opaque JSON document.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Load a site by id
    async fn load(&self, site_id: &str) -> Result<Site, StoreError>;

    /// Save a site, overwriting any previous version
    async fn save(&self, site: &Site) -> Result<(), StoreError>;

    /// Publish a site: export every page as a static HTML document.
    /// Returns the locations of the published pages.
    async fn publish(&self, site_id: &str) -> Result<Vec<String>, StoreError>;

    /// Store an uploaded image, returning the URL/path to reference it by
    async fn upload_image(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;
}

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// No site with the given id
    #[error("site not found: {0}")]
    NotFound(String),

    /// The stored document could not be read or written as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller passed a name the store cannot use safely
    #[error("invalid name: {0}")]
    InvalidName(String),
}
