//! JSON file store
//!
//! Sites live as pretty-printed JSON files under a root directory:
//!
//! ```text
//! <root>/sites/<site_id>.json      saved documents
//! <root>/published/<site_id>/      exported HTML, one file per page slug
//! <root>/uploads/<file_name>       uploaded images
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{SiteStore, StoreError};
use crate::document::Site;
use crate::export::export_document;

/// Local filesystem implementation of [`SiteStore`].
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn site_path(&self, site_id: &str) -> Result<PathBuf, StoreError> {
        Ok(self.root.join("sites").join(format!("{}.json", safe_name(site_id)?)))
    }
}

/// Reject names that could escape the store root.
fn safe_name(name: &str) -> Result<&str, StoreError> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || Path::new(name).is_absolute()
    {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(name)
}

#[async_trait]
impl SiteStore for JsonFileStore {
    async fn load(&self, site_id: &str) -> Result<Site, StoreError> {
        let path = self.site_path(site_id)?;
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(site_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    async fn save(&self, site: &Site) -> Result<(), StoreError> {
        let path = self.site_path(&site.id)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(site)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    async fn publish(&self, site_id: &str) -> Result<Vec<String>, StoreError> {
        let site = self.load(site_id).await?;

        let out_dir = self.root.join("published").join(safe_name(site_id)?);
        std::fs::create_dir_all(&out_dir)?;

        let mut published = Vec::with_capacity(site.pages.len());
        for page in &site.pages {
            let path = out_dir.join(format!("{}.html", safe_name(&page.slug)?));
            std::fs::write(&path, export_document(page, &site.theme))?;
            published.push(path.display().to_string());
        }
        Ok(published)
    }

    async fn upload_image(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let dir = self.root.join("uploads");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(safe_name(file_name)?);
        std::fs::write(&path, bytes)?;
        Ok(format!("/uploads/{}", file_name))
    }
}
